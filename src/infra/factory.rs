use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::services::auth_service::AuthService;
use crate::infra::notifications::http_notification_service::HttpNotificationService;
use crate::infra::payments::stripe_gateway::StripeGateway;
use crate::infra::repositories::{
    sqlite_attendance_repo::SqliteAttendanceRepo, sqlite_auth_repo::SqliteAuthRepo,
    sqlite_branch_repo::SqliteBranchRepo, sqlite_communication_repo::SqliteCommunicationRepo,
    sqlite_gym_repo::SqliteGymRepo, sqlite_member_repo::SqliteMemberRepo,
    sqlite_payment_repo::SqlitePaymentRepo, sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)
        .expect("Invalid SQLite connection string")
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await
        .expect("Failed to connect to SQLite");

    run_sqlite_migrations(&pool).await;

    let payment_gateway = Arc::new(StripeGateway::new(
        config.payment_gateway_url.clone(),
        config.payment_gateway_key.clone(),
    ));
    let notifier = Arc::new(HttpNotificationService::new(
        config.notification_service_url.clone(),
        config.notification_service_token.clone(),
    ));

    let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

    AppState {
        config: config.clone(),
        user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
        gym_repo: Arc::new(SqliteGymRepo::new(pool.clone())),
        branch_repo: Arc::new(SqliteBranchRepo::new(pool.clone())),
        member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
        payment_repo: Arc::new(SqlitePaymentRepo::new(pool.clone())),
        attendance_repo: Arc::new(SqliteAttendanceRepo::new(pool.clone())),
        communication_repo: Arc::new(SqliteCommunicationRepo::new(pool.clone())),
        auth_repo,
        auth_service,
        payment_gateway,
        notifier,
    }
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
