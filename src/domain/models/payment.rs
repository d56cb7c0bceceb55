use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Overdue,
}

/// A membership fee payment. Amounts are exact decimals; `paid_at` is set
/// exactly on the first transition to `paid` and never overwritten.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payment {
    pub id: String,
    pub member_id: String,
    pub amount: Decimal,
    pub status: PaymentStatus,
    pub payment_method: Option<String>,
    pub gateway_intent_id: Option<String>,
    pub receipt_url: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(
        member_id: String,
        amount: Decimal,
        status: PaymentStatus,
        payment_method: Option<String>,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            member_id,
            amount,
            status,
            payment_method,
            gateway_intent_id: None,
            receipt_url: None,
            due_date,
            paid_at: if status == PaymentStatus::Paid { Some(now) } else { None },
            created_at: now,
        }
    }
}
