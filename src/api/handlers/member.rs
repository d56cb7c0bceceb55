use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthOwner;
use crate::api::dtos::requests::{CreateMemberRequest, UpdateMemberStatusRequest};
use crate::domain::models::member::Member;
use crate::domain::services::{membership, qr};
use crate::error::AppError;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

const QR_TOKEN_RETRIES: usize = 3;

/// Public self-registration endpoint (reached by scanning a branch QR).
/// The only unauthenticated member mutation; everything else requires an
/// owner session.
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateMemberRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Member name is required".into()));
    }
    if payload.phone.trim().is_empty() {
        return Err(AppError::Validation("Member phone is required".into()));
    }
    if let Some(age) = payload.age {
        if age <= 0 {
            return Err(AppError::Validation("Age must be positive".into()));
        }
    }

    state.branch_repo.find_by_id(&payload.branch_id).await?
        .ok_or_else(|| AppError::NotFound("Branch not found".into()))?;

    let start = payload.membership_start.unwrap_or_else(Utc::now);
    let end = membership::membership_end(start, payload.membership_plan)?;

    // The QR token carries a uniqueness constraint; on the (vanishingly
    // rare) collision we retry with a fresh token instead of failing the
    // registration.
    let mut last_err = AppError::Internal;
    for _ in 0..QR_TOKEN_RETRIES {
        let member = Member::new(
            payload.name.clone(),
            payload.email.clone(),
            payload.phone.clone(),
            payload.age,
            payload.branch_id.clone(),
            payload.membership_plan,
            start,
            end,
            qr::issue_qr_token(),
        );

        match state.member_repo.create(&member).await {
            Ok(created) => {
                info!("Registered member {} at branch {}", created.id, created.branch_id);
                return Ok(Json(created));
            }
            Err(e) if e.is_unique_violation() => {
                warn!("QR token collision, retrying with a fresh token");
                last_err = e;
            }
            Err(e) => return Err(e),
        }
    }
    Err(last_err)
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let members: Vec<Member> = state.member_repo.list_by_owner(&owner.id).await?
        .into_iter()
        .map(|mut m| {
            m.status = membership::effective_status(now, m.membership_end, m.status);
            m
        })
        .collect();
    Ok(Json(members))
}

pub async fn list_branch_members(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(branch_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.branch_repo.find_for_owner(&owner.id, &branch_id).await?
        .ok_or_else(|| AppError::NotFound("Branch not found".into()))?;

    let now = Utc::now();
    let members: Vec<Member> = state.member_repo.list_by_branch(&branch_id).await?
        .into_iter()
        .map(|mut m| {
            m.status = membership::effective_status(now, m.membership_end, m.status);
            m
        })
        .collect();
    Ok(Json(members))
}

pub async fn get_member(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut member = state.member_repo.find_for_owner(&owner.id, &member_id).await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;
    member.status = membership::effective_status(Utc::now(), member.membership_end, member.status);
    Ok(Json(member))
}

pub async fn list_expiring_members(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(days): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if days < 0 {
        return Err(AppError::Validation("days must be non-negative".into()));
    }

    let now = Utc::now();
    let members = state.member_repo
        .list_expiring_by_owner(&owner.id, now, now + Duration::days(days))
        .await?;
    Ok(Json(members))
}

pub async fn update_member_status(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(member_id): Path<String>,
    Json(payload): Json<UpdateMemberStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.member_repo.find_for_owner(&owner.id, &member_id).await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    state.member_repo.update_status(&member.id, payload.status).await?;

    info!("Member {} status set to {:?}", member.id, payload.status);

    Ok(Json(serde_json::json!({ "status": "updated" })))
}
