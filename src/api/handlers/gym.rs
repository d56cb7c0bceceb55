use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthOwner;
use crate::api::dtos::requests::CreateGymRequest;
use crate::domain::models::gym::Gym;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_gym(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Json(payload): Json<CreateGymRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Gym name is required".into()));
    }

    let gym = Gym::new(payload.name, owner.id, payload.address, payload.phone, payload.email);
    let created = state.gym_repo.create(&gym).await?;

    info!("Created gym {} for owner {}", created.id, created.owner_id);

    Ok(Json(created))
}

pub async fn get_gym(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(gym_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let gym = state.gym_repo.find_for_owner(&owner.id, &gym_id).await?
        .ok_or_else(|| AppError::NotFound("Gym not found".into()))?;
    Ok(Json(gym))
}

pub async fn list_gyms(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
) -> Result<impl IntoResponse, AppError> {
    let gyms = state.gym_repo.list_by_owner(&owner.id).await?;
    Ok(Json(gyms))
}
