use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A physical gym location. `qr_code_url` holds the current registration QR
/// artifact; regeneration replaces it, there is never more than one.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub gym_id: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub qr_code_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Branch {
    pub fn new(name: String, gym_id: String, address: Option<String>, phone: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            gym_id,
            address,
            phone,
            is_active: true,
            qr_code_url: None,
            created_at: Utc::now(),
        }
    }
}
