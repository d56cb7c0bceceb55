use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Base URL embedded into branch registration QR codes.
    pub public_base_url: String,
    pub payment_gateway_url: String,
    pub payment_gateway_key: String,
    pub notification_service_url: String,
    pub notification_service_token: String,
    pub jwt_secret_key: String, // Ed25519 private key (PEM)
    pub jwt_public_key: String, // Ed25519 public key (PEM)
    pub auth_issuer: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            public_base_url: env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            payment_gateway_url: env::var("PAYMENT_GATEWAY_URL").unwrap_or_else(|_| "https://api.stripe.com/v1/payment_intents".to_string()),
            payment_gateway_key: env::var("PAYMENT_GATEWAY_KEY").unwrap_or_default(),
            notification_service_url: env::var("NOTIFICATION_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/notify".to_string()),
            notification_service_token: env::var("NOTIFICATION_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            jwt_secret_key: env::var("JWT_SECRET_KEY").expect("JWT_SECRET_KEY must be set (Ed25519 Private Key)"),
            jwt_public_key: env::var("JWT_PUBLIC_KEY").expect("JWT_PUBLIC_KEY must be set (Ed25519 Public Key)"),
            auth_issuer: env::var("AUTH_ISSUER").unwrap_or_else(|_| "https://api.gym-backend.local".to_string()),
        }
    }
}
