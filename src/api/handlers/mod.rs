pub mod analytics;
pub mod attendance;
pub mod auth;
pub mod branch;
pub mod communication;
pub mod gym;
pub mod health;
pub mod member;
pub mod payment;
