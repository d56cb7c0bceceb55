use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthOwner;
use crate::api::dtos::requests::{CreateIntentRequest, CreatePaymentRequest, UpdatePaymentStatusRequest};
use crate::api::dtos::responses::PaymentIntentResponse;
use crate::domain::models::payment::{Payment, PaymentStatus};
use crate::error::AppError;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.amount <= Decimal::ZERO {
        return Err(AppError::Validation("Amount must be positive".into()));
    }

    state.member_repo.find_for_owner(&owner.id, &payload.member_id).await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let payment = Payment::new(
        payload.member_id,
        payload.amount,
        payload.status.unwrap_or(PaymentStatus::Pending),
        payload.payment_method,
        payload.due_date,
    );
    let created = state.payment_repo.create(&payment).await?;

    info!("Created payment {} for member {}", created.id, created.member_id);

    Ok(Json(created))
}

pub async fn list_pending_payments(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
) -> Result<impl IntoResponse, AppError> {
    let payments = state.payment_repo.list_pending_by_owner(&owner.id).await?;
    Ok(Json(payments))
}

pub async fn member_payments(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_for_owner(&owner.id, &member_id).await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let payments = state.payment_repo.list_by_member(&member_id).await?;
    Ok(Json(payments))
}

pub async fn update_payment_status(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(payment_id): Path<String>,
    Json(payload): Json<UpdatePaymentStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.payment_repo.find_for_owner(&owner.id, &payment_id).await?
        .ok_or_else(|| AppError::NotFound("Payment not found".into()))?;

    let updated = state.payment_repo.update_status(&payment_id, payload.status).await?;

    info!("Payment {} status set to {:?}", updated.id, updated.status);

    Ok(Json(updated))
}

/// Asks the external gateway for a payment intent. The core records nothing
/// here; the dashboard confirms the intent client-side and reports the final
/// status through `update_payment_status`.
pub async fn create_payment_intent(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Json(payload): Json<CreateIntentRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.amount <= Decimal::ZERO {
        return Err(AppError::Validation("Amount must be positive".into()));
    }

    state.member_repo.find_for_owner(&owner.id, &payload.member_id).await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let intent = state.payment_gateway.create_intent(payload.amount, &payload.member_id).await?;

    info!("Created payment intent {} for member {}", intent.intent_id, payload.member_id);

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
