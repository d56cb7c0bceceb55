mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_public_registration_end_to_end() {
    let app = TestApp::new().await;
    let auth = app.register_owner("owner1").await;
    let (_gym_id, branch_id) = app.setup_gym_and_branch(&auth, "Downtown").await;

    let member = app.register_member(&branch_id, "Priya", "monthly").await;

    assert_eq!(member["name"], "Priya");
    assert_eq!(member["branch_id"], branch_id.as_str());
    assert_eq!(member["status"], "active");
    assert_eq!(member["membership_plan"], "monthly");
    assert!(member["qr_code_id"].as_str().unwrap().starts_with("QR_"));

    // Monthly plan ends one calendar month after the start.
    let start: DateTime<Utc> = member["membership_start"].as_str().unwrap().parse().unwrap();
    let end: DateTime<Utc> = member["membership_end"].as_str().unwrap().parse().unwrap();
    assert!(end > start);
    assert!((end - start).num_days() >= 28 && (end - start).num_days() <= 31);

    let members = app.get_json("/api/v1/members", &auth).await;
    assert_eq!(members.as_array().unwrap().len(), 1);
    assert_eq!(members[0]["id"], member["id"]);
}

#[tokio::test]
async fn test_registration_at_unknown_branch_fails() {
    let app = TestApp::new().await;

    let (status, _) = app.send_public(
        "POST",
        "/api/v1/members",
        json!({
            "name": "Nobody",
            "phone": "+910000000000",
            "branch_id": "no-such-branch",
            "membership_plan": "monthly",
        }),
    ).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owners_cannot_see_each_others_members() {
    let app = TestApp::new().await;

    let auth_a = app.register_owner("tenant_a").await;
    let (_, branch_a) = app.setup_gym_and_branch(&auth_a, "A").await;
    let member_a = app.register_member(&branch_a, "Member A", "monthly").await;

    let auth_b = app.register_owner("tenant_b").await;
    let (_, _branch_b) = app.setup_gym_and_branch(&auth_b, "B").await;

    let members_b = app.get_json("/api/v1/members", &auth_b).await;
    assert_eq!(members_b, json!([]));

    // Direct lookup across tenants resolves to nothing.
    let (status, _) = app.send_json(
        "PUT",
        &format!("/api/v1/members/{}/status", member_a["id"].as_str().unwrap()),
        &auth_b,
        json!({ "status": "inactive" }),
    ).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // And the rightful owner still sees the member untouched.
    let members_a = app.get_json("/api/v1/members", &auth_a).await;
    assert_eq!(members_a.as_array().unwrap().len(), 1);
    assert_eq!(members_a[0]["status"], "active");
}

#[tokio::test]
async fn test_owner_can_deactivate_member() {
    let app = TestApp::new().await;
    let auth = app.register_owner("owner2").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Uptown").await;
    let member = app.register_member(&branch_id, "Ravi", "yearly").await;
    let member_id = member["id"].as_str().unwrap();

    let (status, _) = app.send_json(
        "PUT",
        &format!("/api/v1/members/{}/status", member_id),
        &auth,
        json!({ "status": "inactive" }),
    ).await;
    assert_eq!(status, StatusCode::OK);

    // Inactive is an owner override; it sticks even though the membership
    // window is still open.
    let fetched = app.get_json(&format!("/api/v1/members/{}", member_id), &auth).await;
    assert_eq!(fetched["status"], "inactive");
}

#[tokio::test]
async fn test_expiring_members_window() {
    let app = TestApp::new().await;
    let auth = app.register_owner("owner3").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Expiry").await;

    // Backdate the start so the membership ends within the lookahead window.
    let start = Utc::now() - chrono::Duration::days(27);
    let (status, member) = app.send_public(
        "POST",
        "/api/v1/members",
        json!({
            "name": "Soon Expiring",
            "phone": "+911111111111",
            "branch_id": branch_id,
            "membership_plan": "monthly",
            "membership_start": start.to_rfc3339(),
        }),
    ).await;
    assert!(status.is_success());

    app.register_member(&branch_id, "Fresh", "yearly").await;

    let expiring = app.get_json("/api/v1/members/expiring/7", &auth).await;
    let expiring = expiring.as_array().unwrap();
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0]["id"], member["id"]);

    let (status, _) = app.send_json("GET", "/api/v1/members/expiring/-1", &auth, json!(null)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_branch_member_listing() {
    let app = TestApp::new().await;
    let auth = app.register_owner("owner5").await;

    let (gym_id, branch_one) = app.setup_gym_and_branch(&auth, "First").await;
    let (status, branch_two) = app.send_json(
        "POST",
        "/api/v1/branches",
        &auth,
        json!({ "gym_id": gym_id, "name": "Second" }),
    ).await;
    assert!(status.is_success());
    let branch_two_id = branch_two["id"].as_str().unwrap();

    app.register_member(&branch_one, "At One", "monthly").await;
    app.register_member(branch_two_id, "At Two", "monthly").await;
    app.register_member(branch_two_id, "Also At Two", "quarterly").await;

    let one = app.get_json(&format!("/api/v1/branches/{}/members", branch_one), &auth).await;
    assert_eq!(one.as_array().unwrap().len(), 1);

    let two = app.get_json(&format!("/api/v1/branches/{}/members", branch_two_id), &auth).await;
    assert_eq!(two.as_array().unwrap().len(), 2);

    // Foreign owners cannot enumerate a branch roster.
    let auth_other = app.register_owner("owner5b").await;
    let (status, _) = app.send_json(
        "GET",
        &format!("/api/v1/branches/{}/members", branch_one),
        &auth_other,
        json!(null),
    ).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_member_registration_validates_input() {
    let app = TestApp::new().await;
    let auth = app.register_owner("owner4").await;
    let (_, branch_id) = app.setup_gym_and_branch(&auth, "Valid").await;

    let (status, _) = app.send_public(
        "POST",
        "/api/v1/members",
        json!({
            "name": "   ",
            "phone": "+912222222222",
            "branch_id": branch_id,
            "membership_plan": "monthly",
        }),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.send_public(
        "POST",
        "/api/v1/members",
        json!({
            "name": "Bad Age",
            "phone": "+913333333333",
            "branch_id": branch_id,
            "membership_plan": "monthly",
            "age": -5,
        }),
    ).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
