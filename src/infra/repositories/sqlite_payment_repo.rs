use crate::domain::{
    models::payment::{Payment, PaymentStatus},
    ports::PaymentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;

const OWNER_CHAIN: &str = "INNER JOIN members m ON p.member_id = m.id \
                           INNER JOIN branches b ON m.branch_id = b.id \
                           INNER JOIN gyms g ON b.gym_id = g.id";

/// SQLite has no native decimal type, so amounts live as TEXT and are parsed
/// back into `Decimal` here. Sums are computed in Rust to keep the arithmetic
/// exact.
#[derive(FromRow)]
struct PaymentRow {
    id: String,
    member_id: String,
    amount: String,
    status: PaymentStatus,
    payment_method: Option<String>,
    gateway_intent_id: Option<String>,
    receipt_url: Option<String>,
    due_date: Option<DateTime<Utc>>,
    paid_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = AppError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&row.amount)
            .map_err(|e| AppError::InternalWithMsg(format!("Corrupt payment amount '{}': {}", row.amount, e)))?;
        Ok(Payment {
            id: row.id,
            member_id: row.member_id,
            amount,
            status: row.status,
            payment_method: row.payment_method,
            gateway_intent_id: row.gateway_intent_id,
            receipt_url: row.receipt_url,
            due_date: row.due_date,
            paid_at: row.paid_at,
            created_at: row.created_at,
        })
    }
}

fn sum_amounts(raw: Vec<String>) -> Result<Decimal, AppError> {
    raw.iter().try_fold(Decimal::ZERO, |acc, s| {
        Decimal::from_str(s)
            .map(|d| acc + d)
            .map_err(|e| AppError::InternalWithMsg(format!("Corrupt payment amount '{}': {}", s, e)))
    })
}

pub struct SqlitePaymentRepo {
    pool: SqlitePool,
}

impl SqlitePaymentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for SqlitePaymentRepo {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError> {
        let row = sqlx::query_as::<_, PaymentRow>(
            "INSERT INTO payments (id, member_id, amount, status, payment_method, gateway_intent_id, receipt_url, due_date, paid_at, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
            .bind(&payment.id)
            .bind(&payment.member_id)
            .bind(payment.amount.to_string())
            .bind(payment.status)
            .bind(&payment.payment_method)
            .bind(&payment.gateway_intent_id)
            .bind(&payment.receipt_url)
            .bind(payment.due_date)
            .bind(payment.paid_at)
            .bind(payment.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        row.try_into()
    }

    async fn find_for_owner(&self, owner_id: &str, id: &str) -> Result<Option<Payment>, AppError> {
        let sql = format!("SELECT p.* FROM payments p {OWNER_CHAIN} WHERE p.id = ? AND g.owner_id = ?");
        let row = sqlx::query_as::<_, PaymentRow>(&sql)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;
        row.map(Payment::try_from).transpose()
    }

    async fn list_by_member(&self, member_id: &str) -> Result<Vec<Payment>, AppError> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            "SELECT * FROM payments WHERE member_id = ? ORDER BY created_at DESC",
        )
            .bind(member_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn list_pending_by_owner(&self, owner_id: &str) -> Result<Vec<Payment>, AppError> {
        let sql = format!(
            "SELECT p.* FROM payments p {OWNER_CHAIN} \
             WHERE g.owner_id = ? AND p.status = 'pending' \
             ORDER BY p.created_at DESC"
        );
        let rows = sqlx::query_as::<_, PaymentRow>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn update_status(&self, id: &str, status: PaymentStatus) -> Result<Payment, AppError> {
        // paid_at is written on the first transition to paid only.
        let row = sqlx::query_as::<_, PaymentRow>(
            "UPDATE payments SET status = ?, \
             paid_at = CASE WHEN ? = 'paid' AND paid_at IS NULL THEN ? ELSE paid_at END \
             WHERE id = ? RETURNING *",
        )
            .bind(status)
            .bind(status)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Payment not found".into()))?;
        row.try_into()
    }

    async fn sum_paid_since_by_owner(&self, owner_id: &str, since: DateTime<Utc>) -> Result<Decimal, AppError> {
        let sql = format!(
            "SELECT p.amount FROM payments p {OWNER_CHAIN} \
             WHERE g.owner_id = ? AND p.status = 'paid' AND p.paid_at >= ?"
        );
        let raw = sqlx::query_scalar::<_, String>(&sql)
            .bind(owner_id)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        sum_amounts(raw)
    }

    async fn sum_pending_by_owner(&self, owner_id: &str) -> Result<Decimal, AppError> {
        let sql = format!(
            "SELECT p.amount FROM payments p {OWNER_CHAIN} \
             WHERE g.owner_id = ? AND p.status = 'pending'"
        );
        let raw = sqlx::query_scalar::<_, String>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        sum_amounts(raw)
    }

    async fn sum_paid_since_by_branch(&self, branch_id: &str, since: DateTime<Utc>) -> Result<Decimal, AppError> {
        let raw = sqlx::query_scalar::<_, String>(
            "SELECT p.amount FROM payments p \
             INNER JOIN members m ON p.member_id = m.id \
             WHERE m.branch_id = ? AND p.status = 'paid' AND p.paid_at >= ?",
        )
            .bind(branch_id)
            .bind(since)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        sum_amounts(raw)
    }

    async fn sum_pending_by_branch(&self, branch_id: &str) -> Result<Decimal, AppError> {
        let raw = sqlx::query_scalar::<_, String>(
            "SELECT p.amount FROM payments p \
             INNER JOIN members m ON p.member_id = m.id \
             WHERE m.branch_id = ? AND p.status = 'pending'",
        )
            .bind(branch_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        sum_amounts(raw)
    }
}
