use crate::domain::{
    models::member::{Member, MemberStatus},
    ports::MemberRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Owner-scoped member queries always join through
/// branches -> gyms -> users so a row can never leak across tenants.
const OWNER_CHAIN: &str = "INNER JOIN branches b ON m.branch_id = b.id \
                           INNER JOIN gyms g ON b.gym_id = g.id";

pub struct SqliteMemberRepo {
    pool: SqlitePool,
}

impl SqliteMemberRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepo {
    async fn create(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members (id, name, email, phone, age, branch_id, membership_plan, membership_start, membership_end, status, qr_code_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&member.id)
            .bind(&member.name)
            .bind(&member.email)
            .bind(&member.phone)
            .bind(member.age)
            .bind(&member.branch_id)
            .bind(member.membership_plan)
            .bind(member.membership_start)
            .bind(member.membership_end)
            .bind(member.status)
            .bind(&member.qr_code_id)
            .bind(member.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_qr_code(&self, qr_code_id: &str) -> Result<Option<Member>, AppError> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE qr_code_id = ?")
            .bind(qr_code_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Member>, AppError> {
        let sql = format!(
            "SELECT m.* FROM members m {OWNER_CHAIN} WHERE m.id = ? AND g.owner_id = ?"
        );
        sqlx::query_as::<_, Member>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Member>, AppError> {
        let sql = format!(
            "SELECT m.* FROM members m {OWNER_CHAIN} WHERE g.owner_id = ? ORDER BY m.created_at DESC"
        );
        sqlx::query_as::<_, Member>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_branch(&self, branch_id: &str) -> Result<Vec<Member>, AppError> {
        sqlx::query_as::<_, Member>(
            "SELECT * FROM members WHERE branch_id = ? ORDER BY created_at DESC",
        )
            .bind(branch_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_expiring_by_owner(
        &self,
        owner_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Member>, AppError> {
        let sql = format!(
            "SELECT m.* FROM members m {OWNER_CHAIN} \
             WHERE g.owner_id = ? AND m.membership_end >= ? AND m.membership_end <= ? \
             ORDER BY m.membership_end ASC"
        );
        sqlx::query_as::<_, Member>(&sql)
            .bind(owner_id)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_status(&self, id: &str, status: MemberStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE members SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Member not found".into()));
        }
        Ok(())
    }

    async fn count_by_owner(&self, owner_id: &str) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM members m {OWNER_CHAIN} WHERE g.owner_id = ?");
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_active_by_owner(&self, owner_id: &str, now: DateTime<Utc>) -> Result<i64, AppError> {
        let sql = format!(
            "SELECT COUNT(*) FROM members m {OWNER_CHAIN} \
             WHERE g.owner_id = ? AND m.status = 'active' AND m.membership_end >= ?"
        );
        sqlx::query_scalar::<_, i64>(&sql)
            .bind(owner_id)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_by_branch(&self, branch_id: &str) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members WHERE branch_id = ?")
            .bind(branch_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn count_active_by_branch(&self, branch_id: &str, now: DateTime<Utc>) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM members WHERE branch_id = ? AND status = 'active' AND membership_end >= ?",
        )
            .bind(branch_id)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
