use gym_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::ports::{NotificationChannel, PaymentGateway, PaymentIntent},
    domain::services::auth_service::AuthService,
    error::AppError,
    infra::repositories::{
        sqlite_attendance_repo::SqliteAttendanceRepo,
        sqlite_auth_repo::SqliteAuthRepo,
        sqlite_branch_repo::SqliteBranchRepo,
        sqlite_communication_repo::SqliteCommunicationRepo,
        sqlite_gym_repo::SqliteGymRepo,
        sqlite_member_repo::SqliteMemberRepo,
        sqlite_payment_repo::SqlitePaymentRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub struct MockPaymentGateway;

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_intent(&self, _amount: Decimal, member_id: &str) -> Result<PaymentIntent, AppError> {
        Ok(PaymentIntent {
            intent_id: format!("pi_test_{}", member_id),
            client_secret: "pi_test_secret_123".to_string(),
        })
    }
}

pub struct MockNotificationChannel;

#[async_trait]
impl NotificationChannel for MockNotificationChannel {
    async fn send(
        &self,
        _channel: &str,
        _recipient: &str,
        _subject: Option<&str>,
        _message: &str,
    ) -> Result<(), AppError> {
        Ok(())
    }
}

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let priv_key_pem = include_str!("keys/test_private.pem");
        let pub_key_pem = include_str!("keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            public_base_url: "http://localhost:3000".to_string(),
            payment_gateway_url: "http://localhost".to_string(),
            payment_gateway_key: "sk_test".to_string(),
            notification_service_url: "http://localhost".to_string(),
            notification_service_token: "token".to_string(),
            jwt_secret_key: priv_key_pem.to_string(),
            jwt_public_key: pub_key_pem.to_string(),
            auth_issuer: "test-issuer".to_string(),
        };

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            gym_repo: Arc::new(SqliteGymRepo::new(pool.clone())),
            branch_repo: Arc::new(SqliteBranchRepo::new(pool.clone())),
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            payment_repo: Arc::new(SqlitePaymentRepo::new(pool.clone())),
            attendance_repo: Arc::new(SqliteAttendanceRepo::new(pool.clone())),
            communication_repo: Arc::new(SqliteCommunicationRepo::new(pool.clone())),
            auth_repo,
            auth_service,
            payment_gateway: Arc::new(MockPaymentGateway),
            notifier: Arc::new(MockNotificationChannel),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Registers a fresh owner account and returns its session headers.
    pub async fn register_owner(&self, username: &str) -> AuthHeaders {
        let payload = serde_json::json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "securepassword123",
            "name": format!("Owner {}", username),
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Register failed in test helper: status {}", response.status());
        }

        Self::auth_headers_from(response).await
    }

    pub async fn login(&self, username: &str, password: &str) -> AuthHeaders {
        let payload = serde_json::json!({
            "username": username,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        Self::auth_headers_from(response).await
    }

    async fn auth_headers_from(response: axum::response::Response) -> AuthHeaders {
        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies.iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..].find(';').unwrap_or(access_token_cookie.len() - start);
        let access_token = access_token_cookie[start..start+end].to_string();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();
        let csrf_token = body_json["csrf_token"].as_str().expect("No csrf_token in body").to_string();

        AuthHeaders {
            access_token,
            csrf_token
        }
    }

    /// Owner-scoped GET returning the parsed JSON body.
    pub async fn get_json(&self, uri: &str, auth: &AuthHeaders) -> Value {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .body(Body::empty())
                .unwrap()
        ).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        if !status.is_success() {
            panic!("GET {} failed: status {}, body {:?}", uri, status, String::from_utf8_lossy(&bytes));
        }
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Owner-scoped mutation (POST/PUT) returning (status, parsed body).
    pub async fn send_json(
        &self,
        method: &str,
        uri: &str,
        auth: &AuthHeaders,
        payload: Value,
    ) -> (axum::http::StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::COOKIE, format!("access_token={}", auth.access_token))
                .header("X-CSRF-Token", &auth.csrf_token)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    /// Unauthenticated request (public endpoints) returning (status, body).
    pub async fn send_public(
        &self,
        method: &str,
        uri: &str,
        payload: Value,
    ) -> (axum::http::StatusCode, Value) {
        let response = self.router.clone().oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    /// Creates a gym and a branch for the owner, returning (gym_id, branch_id).
    pub async fn setup_gym_and_branch(&self, auth: &AuthHeaders, name: &str) -> (String, String) {
        let (status, gym) = self.send_json(
            "POST",
            "/api/v1/gyms",
            auth,
            serde_json::json!({ "name": format!("{} Gym", name) }),
        ).await;
        assert!(status.is_success(), "gym creation failed: {:?}", gym);
        let gym_id = gym["id"].as_str().unwrap().to_string();

        let (status, branch) = self.send_json(
            "POST",
            "/api/v1/branches",
            auth,
            serde_json::json!({ "gym_id": gym_id, "name": format!("{} Branch", name) }),
        ).await;
        assert!(status.is_success(), "branch creation failed: {:?}", branch);
        let branch_id = branch["id"].as_str().unwrap().to_string();

        (gym_id, branch_id)
    }

    /// Registers a member through the public endpoint, returning the body.
    pub async fn register_member(&self, branch_id: &str, name: &str, plan: &str) -> Value {
        let (status, body) = self.send_public(
            "POST",
            "/api/v1/members",
            serde_json::json!({
                "name": name,
                "phone": "+911234567890",
                "branch_id": branch_id,
                "membership_plan": plan,
            }),
        ).await;
        assert!(status.is_success(), "member registration failed: {:?}", body);
        body
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
