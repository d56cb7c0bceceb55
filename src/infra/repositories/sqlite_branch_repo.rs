use crate::domain::{models::branch::Branch, ports::BranchRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBranchRepo {
    pool: SqlitePool,
}

impl SqliteBranchRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BranchRepository for SqliteBranchRepo {
    async fn create(&self, branch: &Branch) -> Result<Branch, AppError> {
        sqlx::query_as::<_, Branch>(
            "INSERT INTO branches (id, name, gym_id, address, phone, is_active, qr_code_url, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&branch.id)
            .bind(&branch.name)
            .bind(&branch.gym_id)
            .bind(&branch.address)
            .bind(&branch.phone)
            .bind(branch.is_active)
            .bind(&branch.qr_code_url)
            .bind(branch.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Branch>, AppError> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Branch>, AppError> {
        sqlx::query_as::<_, Branch>(
            "SELECT b.* FROM branches b \
             INNER JOIN gyms g ON b.gym_id = g.id \
             WHERE b.id = ? AND g.owner_id = ?",
        )
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_gym(&self, gym_id: &str) -> Result<Vec<Branch>, AppError> {
        sqlx::query_as::<_, Branch>("SELECT * FROM branches WHERE gym_id = ? ORDER BY created_at DESC")
            .bind(gym_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_qr_code(&self, id: &str, qr_code_url: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE branches SET qr_code_url = ? WHERE id = ?")
            .bind(qr_code_url)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Branch not found".into()));
        }
        Ok(())
    }
}
