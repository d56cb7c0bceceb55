pub mod attendance;
pub mod auth;
pub mod branch;
pub mod communication;
pub mod gym;
pub mod member;
pub mod payment;
pub mod user;
