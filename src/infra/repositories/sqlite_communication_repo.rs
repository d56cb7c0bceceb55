use crate::domain::{models::communication::Communication, ports::CommunicationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCommunicationRepo {
    pool: SqlitePool,
}

impl SqliteCommunicationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommunicationRepository for SqliteCommunicationRepo {
    async fn create(&self, communication: &Communication) -> Result<Communication, AppError> {
        sqlx::query_as::<_, Communication>(
            "INSERT INTO communications (id, branch_id, member_id, type, subject, message, status, sent_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&communication.id)
            .bind(&communication.branch_id)
            .bind(&communication.member_id)
            .bind(communication.comm_type)
            .bind(&communication.subject)
            .bind(&communication.message)
            .bind(&communication.status)
            .bind(communication.sent_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Communication>, AppError> {
        sqlx::query_as::<_, Communication>(
            "SELECT c.* FROM communications c \
             INNER JOIN branches b ON c.branch_id = b.id \
             INNER JOIN gyms g ON b.gym_id = g.id \
             WHERE g.owner_id = ? \
             ORDER BY c.sent_at DESC",
        )
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_branch(&self, branch_id: &str) -> Result<Vec<Communication>, AppError> {
        sqlx::query_as::<_, Communication>(
            "SELECT * FROM communications WHERE branch_id = ? ORDER BY sent_at DESC",
        )
            .bind(branch_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
