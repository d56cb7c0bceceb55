pub mod auth_service;
pub mod membership;
pub mod qr;
