use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Gym {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Gym {
    pub fn new(name: String, owner_id: String, address: Option<String>, phone: Option<String>, email: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            owner_id,
            address,
            phone,
            email,
            created_at: Utc::now(),
        }
    }
}
