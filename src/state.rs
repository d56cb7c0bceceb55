use std::sync::Arc;
use crate::domain::ports::{
    AttendanceRepository, AuthRepository, BranchRepository, CommunicationRepository,
    GymRepository, MemberRepository, NotificationChannel, PaymentGateway, PaymentRepository,
    UserRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub gym_repo: Arc<dyn GymRepository>,
    pub branch_repo: Arc<dyn BranchRepository>,
    pub member_repo: Arc<dyn MemberRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub attendance_repo: Arc<dyn AttendanceRepository>,
    pub communication_repo: Arc<dyn CommunicationRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub auth_service: Arc<AuthService>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub notifier: Arc<dyn NotificationChannel>,
}
