use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthOwner;
use crate::api::dtos::responses::MetricsResponse;
use crate::error::AppError;
use chrono::{Duration, Utc};
use std::sync::Arc;

const REVENUE_WINDOW_DAYS: i64 = 30;

pub async fn owner_metrics(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let window_start = now - Duration::days(REVENUE_WINDOW_DAYS);

    let total_members = state.member_repo.count_by_owner(&owner.id).await?;
    let active_members = state.member_repo.count_active_by_owner(&owner.id, now).await?;
    let monthly_revenue = state.payment_repo.sum_paid_since_by_owner(&owner.id, window_start).await?;
    let pending_fees = state.payment_repo.sum_pending_by_owner(&owner.id).await?;

    Ok(Json(MetricsResponse {
        total_members,
        active_members,
        monthly_revenue,
        pending_fees,
    }))
}

pub async fn branch_metrics(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(branch_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let branch = state.branch_repo.find_for_owner(&owner.id, &branch_id).await?
        .ok_or_else(|| AppError::NotFound("Branch not found".into()))?;

    let now = Utc::now();
    let window_start = now - Duration::days(REVENUE_WINDOW_DAYS);

    let total_members = state.member_repo.count_by_branch(&branch.id).await?;
    let active_members = state.member_repo.count_active_by_branch(&branch.id, now).await?;
    let monthly_revenue = state.payment_repo.sum_paid_since_by_branch(&branch.id, window_start).await?;
    let pending_fees = state.payment_repo.sum_pending_by_branch(&branch.id).await?;

    Ok(Json(MetricsResponse {
        total_members,
        active_members,
        monthly_revenue,
        pending_fees,
    }))
}
