use crate::domain::{models::gym::Gym, ports::GymRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteGymRepo {
    pool: SqlitePool,
}

impl SqliteGymRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for SqliteGymRepo {
    async fn create(&self, gym: &Gym) -> Result<Gym, AppError> {
        sqlx::query_as::<_, Gym>(
            "INSERT INTO gyms (id, name, owner_id, address, phone, email, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&gym.id)
            .bind(&gym.name)
            .bind(&gym.owner_id)
            .bind(&gym.address)
            .bind(&gym.phone)
            .bind(&gym.email)
            .bind(gym.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Gym>, AppError> {
        sqlx::query_as::<_, Gym>("SELECT * FROM gyms WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Gym>, AppError> {
        sqlx::query_as::<_, Gym>("SELECT * FROM gyms WHERE owner_id = ? ORDER BY created_at DESC")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
