use crate::domain::models::{attendance::Attendance, member::Member};
use rust_decimal::Decimal;
use serde::Serialize;

/// Dashboard figures. Always internally consistent with the scoped entity
/// sets: `active_members <= total_members`, empty scopes yield zeros.
#[derive(Serialize)]
pub struct MetricsResponse {
    pub total_members: i64,
    pub active_members: i64,
    pub monthly_revenue: Decimal,
    pub pending_fees: Decimal,
}

#[derive(Serialize)]
pub struct CheckInResponse {
    pub message: String,
    pub attendance: Attendance,
    pub member: Member,
}

#[derive(Serialize)]
pub struct BranchQrResponse {
    pub qr_code_url: String,
    pub registration_url: String,
}

#[derive(Serialize)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}
