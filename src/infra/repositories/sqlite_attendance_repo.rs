use crate::domain::{models::attendance::Attendance, ports::AttendanceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct SqliteAttendanceRepo {
    pool: SqlitePool,
}

impl SqliteAttendanceRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for SqliteAttendanceRepo {
    async fn create(&self, attendance: &Attendance) -> Result<Attendance, AppError> {
        sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance (id, member_id, branch_id, check_in_time, check_out_time, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&attendance.id)
            .bind(&attendance.member_id)
            .bind(&attendance.branch_id)
            .bind(attendance.check_in_time)
            .bind(attendance.check_out_time)
            .bind(attendance.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Attendance>, AppError> {
        sqlx::query_as::<_, Attendance>(
            "SELECT * FROM attendance WHERE member_id = ? ORDER BY check_in_time DESC",
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner_between(
        &self,
        owner_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Attendance>, AppError> {
        sqlx::query_as::<_, Attendance>(
            "SELECT a.* FROM attendance a \
             INNER JOIN branches b ON a.branch_id = b.id \
             INNER JOIN gyms g ON b.gym_id = g.id \
             WHERE g.owner_id = ? AND a.check_in_time >= ? AND a.check_in_time < ? \
             ORDER BY a.check_in_time DESC",
        )
            .bind(owner_id)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
