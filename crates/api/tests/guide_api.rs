//! HTTP-level tests for guide registration and roster status.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, error_fields, get_auth, guide_body, patch_json_auth,
    post_json, register_guide,
};
use serde_json::json;

#[tokio::test]
async fn registration_returns_message_and_unassigned_guide() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/guides/register",
        guide_body("Pema Tshering", "pema@example.com", "guide"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "Registration successful! We will call and inform you if we require your services."
    );
    assert_eq!(json["guide"]["status"], "not_assigned");
    assert_eq!(json["guide"]["registrationType"], "guide");
    assert!(json["guide"].get("confirmEmail").is_none());
}

#[tokio::test]
async fn mismatched_confirmation_email_is_rejected() {
    let app = build_test_app();
    let mut body = guide_body("Pema Tshering", "pema@example.com", "guide");
    body["confirmEmail"] = json!("pema@example.org");

    let response = post_json(&app, "/api/guides/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(error_fields(&json), vec!["confirmEmail"]);
    assert_eq!(json["errors"][0]["message"], "Emails don't match");
}

#[tokio::test]
async fn unknown_registration_type_is_rejected() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/guides/register",
        guide_body("Pema Tshering", "pema@example.com", "porter"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        error_fields(&body_json(response).await),
        vec!["registrationType"]
    );
}

#[tokio::test]
async fn guides_can_be_filtered_by_type() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    register_guide(&app, "Pema", "pema@example.com", "guide").await;
    let driver = register_guide(&app, "Ugyen", "ugyen@example.com", "driver").await;

    let json = body_json(get_auth(&app, "/api/guides?type=driver", &token).await).await;
    let guides = json.as_array().unwrap();
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0]["id"], driver);

    let all = body_json(get_auth(&app, "/api/guides", &token).await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let blank = body_json(get_auth(&app, "/api/guides?type=", &token).await).await;
    assert_eq!(blank.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn status_outside_the_set_leaves_guide_unchanged() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let id = register_guide(&app, "Pema", "pema@example.com", "guide").await;

    let response = patch_json_auth(
        &app,
        &format!("/api/guides/{id}/status"),
        json!({ "status": "on_leave" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let guide = body_json(get_auth(&app, &format!("/api/guides/{id}"), &token).await).await;
    assert_eq!(guide["status"], "not_assigned");
}

#[tokio::test]
async fn guide_can_be_blacklisted_and_reinstated() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let id = register_guide(&app, "Pema", "pema@example.com", "guide").await;

    for status in ["blacklisted", "not_assigned", "assigned"] {
        let response = patch_json_auth(
            &app,
            &format!("/api/guides/{id}/status"),
            json!({ "status": status }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], status);
    }
}

#[tokio::test]
async fn status_change_on_missing_guide_is_404() {
    let app = build_test_app();
    let token = admin_token(&app).await;

    let response = patch_json_auth(
        &app,
        "/api/guides/99/status",
        json!({ "status": "assigned" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn in_memory_backing_accepts_duplicate_emails() {
    let app = build_test_app();
    let token = admin_token(&app).await;
    let first = register_guide(&app, "Pema", "a@b.com", "guide").await;
    let second = register_guide(&app, "Pema Again", "a@b.com", "guide").await;

    assert_ne!(first, second);
    let all = body_json(get_auth(&app, "/api/guides", &token).await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}
