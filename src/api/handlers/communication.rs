use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthOwner;
use crate::api::dtos::requests::CreateCommunicationRequest;
use crate::domain::models::communication::{Communication, CommunicationType};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_communication(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Json(payload): Json<CreateCommunicationRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".into()));
    }

    state.branch_repo.find_for_owner(&owner.id, &payload.branch_id).await?
        .ok_or_else(|| AppError::NotFound("Branch not found".into()))?;

    let target = match &payload.member_id {
        Some(member_id) => {
            let member = state.member_repo.find_for_owner(&owner.id, member_id).await?
                .ok_or_else(|| AppError::NotFound("Member not found".into()))?;
            if member.branch_id != payload.branch_id {
                return Err(AppError::Validation("Member does not belong to this branch".into()));
            }
            Some(member)
        }
        None => None,
    };

    let mut communication = Communication::new(
        payload.branch_id,
        payload.member_id,
        payload.comm_type,
        payload.subject,
        payload.message,
    );

    // Delivery goes through the external channel; the row records the
    // outcome. Announcements are dashboard-only and are not dispatched.
    if payload.comm_type != CommunicationType::Announcement {
        if let Some(recipient) = target.as_ref().and_then(contact_for) {
            let sent = state.notifier.send(
                payload.comm_type.as_str(),
                &recipient,
                communication.subject.as_deref(),
                &communication.message,
            ).await;

            if let Err(e) = sent {
                warn!("Delivery failed for communication to {}: {}", recipient, e);
                communication.status = "failed".to_string();
            }
        }
    }

    let created = state.communication_repo.create(&communication).await?;

    info!("Recorded {} communication {} for branch {}",
        created.comm_type.as_str(), created.id, created.branch_id);

    Ok(Json(created))
}

pub async fn list_communications(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
) -> Result<impl IntoResponse, AppError> {
    let communications = state.communication_repo.list_by_owner(&owner.id).await?;
    Ok(Json(communications))
}

pub async fn branch_communications(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(branch_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.branch_repo.find_for_owner(&owner.id, &branch_id).await?
        .ok_or_else(|| AppError::NotFound("Branch not found".into()))?;

    let communications = state.communication_repo.list_by_branch(&branch_id).await?;
    Ok(Json(communications))
}

fn contact_for(member: &crate::domain::models::member::Member) -> Option<String> {
    member.email.clone().or_else(|| Some(member.phone.clone()))
}
