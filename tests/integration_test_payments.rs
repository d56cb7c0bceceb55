mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_pending_payment_shows_up_in_metrics() {
    let app = TestApp::new().await;
    let auth = app.register_owner("fees_owner").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Fees").await;
    let member = app.register_member(&branch_id, "Payer", "monthly").await;
    let member_id = member["id"].as_str().unwrap();

    let (status, payment) = app.send_json(
        "POST",
        "/api/v1/payments",
        &auth,
        json!({ "member_id": member_id, "amount": "2500.00" }),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["status"], "pending");
    assert_eq!(payment["amount"], "2500.00");
    assert!(payment["paid_at"].is_null());

    let pending = app.get_json("/api/v1/payments/pending", &auth).await;
    assert_eq!(pending.as_array().unwrap().len(), 1);
    assert_eq!(pending[0]["id"], payment["id"]);

    let metrics = app.get_json("/api/v1/analytics", &auth).await;
    assert_eq!(metrics["total_members"], 1);
    assert_eq!(metrics["active_members"], 1);
    assert_eq!(metrics["pending_fees"], "2500.00");
    assert_eq!(metrics["monthly_revenue"], "0");
}

#[tokio::test]
async fn test_marking_paid_moves_fees_into_revenue() {
    let app = TestApp::new().await;
    let auth = app.register_owner("rev_owner").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Revenue").await;
    let member = app.register_member(&branch_id, "Payer", "monthly").await;
    let member_id = member["id"].as_str().unwrap();

    let (_, payment) = app.send_json(
        "POST",
        "/api/v1/payments",
        &auth,
        json!({ "member_id": member_id, "amount": "2500.00" }),
    ).await;
    let payment_id = payment["id"].as_str().unwrap();

    let (status, updated) = app.send_json(
        "PUT",
        &format!("/api/v1/payments/{}/status", payment_id),
        &auth,
        json!({ "status": "paid" }),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "paid");
    assert!(updated["paid_at"].is_string());

    let metrics = app.get_json("/api/v1/analytics", &auth).await;
    assert_eq!(metrics["pending_fees"], "0");
    assert_eq!(metrics["monthly_revenue"], "2500.00");

    let pending = app.get_json("/api/v1/payments/pending", &auth).await;
    assert_eq!(pending, json!([]));
}

#[tokio::test]
async fn test_paid_at_survives_repeated_updates() {
    let app = TestApp::new().await;
    let auth = app.register_owner("idem_owner").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Idem").await;
    let member = app.register_member(&branch_id, "Payer", "monthly").await;
    let member_id = member["id"].as_str().unwrap();

    let (_, payment) = app.send_json(
        "POST",
        "/api/v1/payments",
        &auth,
        json!({ "member_id": member_id, "amount": "100.50" }),
    ).await;
    let payment_id = payment["id"].as_str().unwrap();
    let uri = format!("/api/v1/payments/{}/status", payment_id);

    let (_, first) = app.send_json("PUT", &uri, &auth, json!({ "status": "paid" })).await;
    let first_paid_at = first["paid_at"].as_str().unwrap().to_string();

    let (_, second) = app.send_json("PUT", &uri, &auth, json!({ "status": "paid" })).await;
    assert_eq!(second["paid_at"].as_str().unwrap(), first_paid_at);
}

#[tokio::test]
async fn test_zero_activity_owner_gets_zero_metrics() {
    let app = TestApp::new().await;
    let auth = app.register_owner("empty_owner").await;
    app.setup_gym_and_branch(&auth, "Empty").await;

    let metrics = app.get_json("/api/v1/analytics", &auth).await;
    assert_eq!(metrics["total_members"], 0);
    assert_eq!(metrics["active_members"], 0);
    assert_eq!(metrics["monthly_revenue"], "0");
    assert_eq!(metrics["pending_fees"], "0");
}

#[tokio::test]
async fn test_non_positive_amounts_are_rejected() {
    let app = TestApp::new().await;
    let auth = app.register_owner("strict_owner").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Strict").await;
    let member = app.register_member(&branch_id, "Payer", "monthly").await;
    let member_id = member["id"].as_str().unwrap();

    for amount in ["0", "-10.00"] {
        let (status, _) = app.send_json(
            "POST",
            "/api/v1/payments",
            &auth,
            json!({ "member_id": member_id, "amount": amount }),
        ).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_payment_intent_returns_client_secret() {
    let app = TestApp::new().await;
    let auth = app.register_owner("intent_owner").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Intent").await;
    let member = app.register_member(&branch_id, "Payer", "monthly").await;
    let member_id = member["id"].as_str().unwrap();

    let (status, body) = app.send_json(
        "POST",
        "/api/v1/payments/intent",
        &auth,
        json!({ "member_id": member_id, "amount": "999.00" }),
    ).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["client_secret"], "pi_test_secret_123");
}

#[tokio::test]
async fn test_payments_are_owner_scoped() {
    let app = TestApp::new().await;

    let auth_a = app.register_owner("pay_a").await;
    let (_, branch_a) = app.setup_gym_and_branch(&auth_a, "PayA").await;
    let member_a = app.register_member(&branch_a, "Member A", "monthly").await;
    let member_a_id = member_a["id"].as_str().unwrap();

    let (_, payment) = app.send_json(
        "POST",
        "/api/v1/payments",
        &auth_a,
        json!({ "member_id": member_a_id, "amount": "500.00" }),
    ).await;
    let payment_id = payment["id"].as_str().unwrap();

    let auth_b = app.register_owner("pay_b").await;

    // Another owner cannot record payments against A's member.
    let (status, _) = app.send_json(
        "POST",
        "/api/v1/payments",
        &auth_b,
        json!({ "member_id": member_a_id, "amount": "500.00" }),
    ).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Nor flip the status of A's payment.
    let (status, _) = app.send_json(
        "PUT",
        &format!("/api/v1/payments/{}/status", payment_id),
        &auth_b,
        json!({ "status": "paid" }),
    ).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
