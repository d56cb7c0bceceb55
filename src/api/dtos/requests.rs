use crate::domain::models::communication::CommunicationType;
use crate::domain::models::member::{MembershipPlan, MemberStatus};
use crate::domain::models::payment::PaymentStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateGymRequest {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateBranchRequest {
    pub gym_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Self-registration payload. `membership_end` is never accepted from the
/// client; it is derived server-side from the start and the plan.
#[derive(Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub age: Option<i32>,
    pub branch_id: String,
    pub membership_plan: MembershipPlan,
    pub membership_start: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct UpdateMemberStatusRequest {
    pub status: MemberStatus,
}

#[derive(Deserialize)]
pub struct CreatePaymentRequest {
    pub member_id: String,
    pub amount: Decimal,
    pub status: Option<PaymentStatus>,
    pub payment_method: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}

#[derive(Deserialize)]
pub struct CreateIntentRequest {
    pub member_id: String,
    pub amount: Decimal,
}

#[derive(Deserialize)]
pub struct CheckInRequest {
    pub qr_code_id: String,
}

#[derive(Deserialize)]
pub struct CreateCommunicationRequest {
    pub branch_id: String,
    pub member_id: Option<String>,
    #[serde(rename = "type")]
    pub comm_type: CommunicationType,
    pub subject: Option<String>,
    pub message: String,
}
