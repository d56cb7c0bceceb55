use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthOwner;
use crate::api::dtos::requests::CreateBranchRequest;
use crate::api::dtos::responses::BranchQrResponse;
use crate::domain::models::branch::Branch;
use crate::domain::services::qr;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_branch(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Json(payload): Json<CreateBranchRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Branch name is required".into()));
    }

    state.gym_repo.find_for_owner(&owner.id, &payload.gym_id).await?
        .ok_or_else(|| AppError::NotFound("Gym not found".into()))?;

    let branch = Branch::new(payload.name, payload.gym_id, payload.address, payload.phone);
    let created = state.branch_repo.create(&branch).await?;

    // Every branch gets its registration QR at creation; it can be
    // regenerated later, replacing this one.
    let registration_url = qr::registration_url(&state.config.public_base_url, &created.id);
    let qr_code_url = qr::render_qr_data_url(&registration_url)?;
    state.branch_repo.update_qr_code(&created.id, &qr_code_url).await?;

    info!("Created branch {} with registration QR", created.id);

    Ok(Json(Branch {
        qr_code_url: Some(qr_code_url),
        ..created
    }))
}

pub async fn list_branches(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(gym_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.gym_repo.find_for_owner(&owner.id, &gym_id).await?
        .ok_or_else(|| AppError::NotFound("Gym not found".into()))?;

    let branches = state.branch_repo.list_by_gym(&gym_id).await?;
    Ok(Json(branches))
}

pub async fn get_branch(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(branch_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let branch = state.branch_repo.find_for_owner(&owner.id, &branch_id).await?
        .ok_or_else(|| AppError::NotFound("Branch not found".into()))?;
    Ok(Json(branch))
}

/// Regenerates the branch registration QR. The previous artifact reference
/// is replaced in a single UPDATE; there is never more than one current QR.
pub async fn generate_branch_qr(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(branch_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let branch = state.branch_repo.find_for_owner(&owner.id, &branch_id).await?
        .ok_or_else(|| AppError::NotFound("Branch not found".into()))?;

    let registration_url = qr::registration_url(&state.config.public_base_url, &branch.id);
    let qr_code_url = qr::render_qr_data_url(&registration_url)?;
    state.branch_repo.update_qr_code(&branch.id, &qr_code_url).await?;

    info!("Regenerated registration QR for branch {}", branch.id);

    Ok(Json(BranchQrResponse { qr_code_url, registration_url }))
}
