use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MembershipPlan {
    Monthly,
    Quarterly,
    Yearly,
}

impl MembershipPlan {
    /// Plan duration in calendar months.
    pub fn months(&self) -> u32 {
        match self {
            MembershipPlan::Monthly => 1,
            MembershipPlan::Quarterly => 3,
            MembershipPlan::Yearly => 12,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Expired,
}

/// A gym member. `qr_code_id` is assigned once at creation and never
/// reassigned; the stored `status` is a cache, read paths classify against
/// `membership_end` (see `domain::services::membership`).
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub age: Option<i32>,
    pub branch_id: String,
    pub membership_plan: MembershipPlan,
    pub membership_start: DateTime<Utc>,
    pub membership_end: DateTime<Utc>,
    pub status: MemberStatus,
    pub qr_code_id: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: Option<String>,
        phone: String,
        age: Option<i32>,
        branch_id: String,
        membership_plan: MembershipPlan,
        membership_start: DateTime<Utc>,
        membership_end: DateTime<Utc>,
        qr_code_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            age,
            branch_id,
            membership_plan,
            membership_start,
            membership_end,
            status: MemberStatus::Active,
            qr_code_id,
            created_at: Utc::now(),
        }
    }
}
