use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A single check-in. `branch_id` is denormalized from the member so that
/// per-branch attendance queries skip a join.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Attendance {
    pub id: String,
    pub member_id: String,
    pub branch_id: String,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Attendance {
    pub fn new(member_id: String, branch_id: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            branch_id,
            check_in_time: now,
            check_out_time: None,
            created_at: now,
        }
    }
}
