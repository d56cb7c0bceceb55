use crate::domain::models::{
    attendance::Attendance, auth::RefreshTokenRecord, branch::Branch,
    communication::Communication, gym::Gym,
    member::{Member, MemberStatus},
    payment::{Payment, PaymentStatus},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait GymRepository: Send + Sync {
    async fn create(&self, gym: &Gym) -> Result<Gym, AppError>;
    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Gym>, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Gym>, AppError>;
}

#[async_trait]
pub trait BranchRepository: Send + Sync {
    async fn create(&self, branch: &Branch) -> Result<Branch, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Branch>, AppError>;
    /// Resolves the branch only when its Gym belongs to `owner_id`.
    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Branch>, AppError>;
    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Branch>, AppError>;
    async fn update_qr_code(&self, id: &str, qr_code_url: &str) -> Result<(), AppError>;
}

/// Member reads scoped to an owner go through the full
/// Member -> Branch -> Gym -> Owner join chain. Omitting a link is a
/// tenant-isolation bug, so scoped variants are the only owner-facing entry
/// points this trait exposes.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn create(&self, member: &Member) -> Result<Member, AppError>;
    async fn find_by_qr_code(&self, qr_code_id: &str) -> Result<Option<Member>, AppError>;
    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Member>, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Member>, AppError>;
    async fn list_by_branch(&self, branch_id: &str) -> Result<Vec<Member>, AppError>;
    async fn list_expiring_by_owner(
        &self,
        owner_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Member>, AppError>;
    async fn update_status(&self, id: &str, status: MemberStatus) -> Result<(), AppError>;
    async fn count_by_owner(&self, owner_id: &str) -> Result<i64, AppError>;
    /// Members stored `active` whose membership has not yet ended at `now`.
    async fn count_active_by_owner(&self, owner_id: &str, now: DateTime<Utc>) -> Result<i64, AppError>;
    async fn count_by_branch(&self, branch_id: &str) -> Result<i64, AppError>;
    async fn count_active_by_branch(&self, branch_id: &str, now: DateTime<Utc>) -> Result<i64, AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError>;
    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Payment>, AppError>;
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Payment>, AppError>;
    async fn list_pending_by_owner(&self, owner_id: &str) -> Result<Vec<Payment>, AppError>;
    /// Sets `paid_at` on the first transition to `paid`; never overwrites it.
    async fn update_status(&self, id: &str, status: PaymentStatus) -> Result<Payment, AppError>;
    async fn sum_paid_since_by_owner(&self, owner_id: &str, since: DateTime<Utc>) -> Result<Decimal, AppError>;
    async fn sum_pending_by_owner(&self, owner_id: &str) -> Result<Decimal, AppError>;
    async fn sum_paid_since_by_branch(&self, branch_id: &str, since: DateTime<Utc>) -> Result<Decimal, AppError>;
    async fn sum_pending_by_branch(&self, branch_id: &str) -> Result<Decimal, AppError>;
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn create(&self, attendance: &Attendance) -> Result<Attendance, AppError>;
    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Attendance>, AppError>;
    async fn list_by_owner_between(
        &self,
        owner_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Attendance>, AppError>;
}

#[async_trait]
pub trait CommunicationRepository: Send + Sync {
    async fn create(&self, communication: &Communication) -> Result<Communication, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Communication>, AppError>;
    async fn list_by_branch(&self, branch_id: &str) -> Result<Vec<Communication>, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: &str) -> Result<(), AppError>;
}

pub struct PaymentIntent {
    pub intent_id: String,
    pub client_secret: String,
}

/// External payment gateway. The core only records the resulting status;
/// gateway failures surface as `AppError::Upstream`.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_intent(&self, amount: Decimal, member_id: &str) -> Result<PaymentIntent, AppError>;
}

/// External delivery channel (email / WhatsApp). Delivery itself is outside
/// the core; callers persist the reported outcome on the Communication row.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    async fn send(
        &self,
        channel: &str,
        recipient: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<(), AppError>;
}
