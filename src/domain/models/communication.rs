use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum CommunicationType {
    Whatsapp,
    Email,
    Announcement,
}

impl CommunicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunicationType::Whatsapp => "whatsapp",
            CommunicationType::Email => "email",
            CommunicationType::Announcement => "announcement",
        }
    }
}

/// A message sent to a branch (optionally targeted at one member). The row
/// records the delivery outcome; actual delivery happens through the
/// `NotificationChannel` collaborator.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Communication {
    pub id: String,
    pub branch_id: String,
    pub member_id: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub comm_type: CommunicationType,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub sent_at: DateTime<Utc>,
}

impl Communication {
    pub fn new(
        branch_id: String,
        member_id: Option<String>,
        comm_type: CommunicationType,
        subject: Option<String>,
        message: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            branch_id,
            member_id,
            comm_type,
            subject,
            message,
            status: "sent".to_string(),
            sent_at: Utc::now(),
        }
    }
}
