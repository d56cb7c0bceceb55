use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{analytics, attendance, auth, branch, communication, gym, health, member, payment};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Gyms & Branches
        .route("/api/v1/gyms", post(gym::create_gym).get(gym::list_gyms))
        .route("/api/v1/gyms/{gym_id}", get(gym::get_gym))
        .route("/api/v1/gyms/{gym_id}/branches", get(branch::list_branches))
        .route("/api/v1/branches", post(branch::create_branch))
        .route("/api/v1/branches/{branch_id}", get(branch::get_branch))
        .route("/api/v1/branches/{branch_id}/qr", post(branch::generate_branch_qr))
        .route("/api/v1/branches/{branch_id}/metrics", get(analytics::branch_metrics))
        .route("/api/v1/branches/{branch_id}/members", get(member::list_branch_members))

        // Members (creation is the public self-registration endpoint)
        .route("/api/v1/members", post(member::create_member).get(member::list_members))
        .route("/api/v1/members/expiring/{days}", get(member::list_expiring_members))
        .route("/api/v1/members/{member_id}", get(member::get_member))
        .route("/api/v1/members/{member_id}/status", put(member::update_member_status))
        .route("/api/v1/members/{member_id}/payments", get(payment::member_payments))
        .route("/api/v1/members/{member_id}/attendance", get(attendance::member_attendance))

        // Payments
        .route("/api/v1/payments", post(payment::create_payment))
        .route("/api/v1/payments/pending", get(payment::list_pending_payments))
        .route("/api/v1/payments/{payment_id}/status", put(payment::update_payment_status))
        .route("/api/v1/payments/intent", post(payment::create_payment_intent))

        // Attendance (check-in is the public kiosk endpoint)
        .route("/api/v1/attendance/checkin", post(attendance::check_in))
        .route("/api/v1/attendance/today", get(attendance::today_attendance))

        // Communications
        .route("/api/v1/communications", post(communication::create_communication).get(communication::list_communications))
        .route("/api/v1/branches/{branch_id}/communications", get(communication::branch_communications))

        // Analytics
        .route("/api/v1/analytics", get(analytics::owner_metrics))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        owner_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
