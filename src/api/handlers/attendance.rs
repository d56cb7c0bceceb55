use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthOwner;
use crate::api::dtos::requests::CheckInRequest;
use crate::api::dtos::responses::CheckInResponse;
use crate::domain::models::attendance::Attendance;
use crate::error::AppError;
use chrono::{DateTime, Duration, Local, NaiveTime, Utc};
use std::sync::Arc;
use tracing::info;

/// Public kiosk endpoint: a member scans their personal QR code. Unknown
/// codes fail with 404 and write nothing. There is no same-day
/// de-duplication; each scan is its own attendance row.
pub async fn check_in(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckInRequest>,
) -> Result<impl IntoResponse, AppError> {
    let member = state.member_repo.find_by_qr_code(&payload.qr_code_id).await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let attendance = Attendance::new(member.id.clone(), member.branch_id.clone());
    let created = state.attendance_repo.create(&attendance).await?;

    info!("Member {} checked in at branch {}", member.id, member.branch_id);

    Ok(Json(CheckInResponse {
        message: "Check-in successful".to_string(),
        attendance: created,
        member,
    }))
}

pub async fn today_attendance(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
) -> Result<impl IntoResponse, AppError> {
    let (from, to) = local_day_bounds()?;
    let attendance = state.attendance_repo.list_by_owner_between(&owner.id, from, to).await?;
    Ok(Json(attendance))
}

pub async fn member_attendance(
    State(state): State<Arc<AppState>>,
    owner: AuthOwner,
    Path(member_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.member_repo.find_for_owner(&owner.id, &member_id).await?
        .ok_or_else(|| AppError::NotFound("Member not found".into()))?;

    let attendance = state.attendance_repo.list_by_member(&member_id).await?;
    Ok(Json(attendance))
}

/// `[midnight today, midnight tomorrow)` in server-local time, as UTC
/// instants for the storage layer.
fn local_day_bounds() -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
    let today = Local::now().date_naive();
    let start = today.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1);

    let to_utc = |naive: chrono::NaiveDateTime| {
        naive.and_local_timezone(Local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or(AppError::Internal)
    };

    Ok((to_utc(start)?, to_utc(end)?))
}
