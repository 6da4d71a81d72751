//! HTTP-level tests for admin login and access control.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, build_test_app, build_test_app_with, get, get_auth, post_json,
    post_json_auth, test_config, test_jwt_config, tour_body,
};
use serde_json::json;
use tourdesk_api::auth::jwt::generate_access_token;

#[tokio::test]
async fn login_returns_token_and_lifetime() {
    let app = build_test_app();
    let response = post_json(
        &app,
        "/api/admin/login",
        json!({ "password": common::ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(json["expiresIn"], 3600);
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let app = build_test_app();
    let response = post_json(&app, "/api/admin/login", json!({ "password": "guess" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn login_without_password_is_a_validation_error() {
    let app = build_test_app();
    let response = post_json(&app, "/api/admin/login", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(common::error_fields(&json), vec!["password"]);
}

#[tokio::test]
async fn login_is_disabled_without_a_configured_hash() {
    let mut config = test_config();
    config.admin_password_hash = None;
    let app = build_test_app_with(config);

    let response = post_json(
        &app,
        "/api/admin/login",
        json!({ "password": common::ADMIN_PASSWORD }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await["error"],
        "Admin login is not configured"
    );
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let app = build_test_app();

    for uri in [
        "/api/bookings",
        "/api/inquiries",
        "/api/guides",
        "/api/itineraries",
        "/api/custom-tours",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn malformed_or_forged_tokens_are_rejected() {
    let app = build_test_app();

    let response = get_auth(&app, "/api/bookings", "not.a.token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let mut forged = test_jwt_config();
    forged.secret = "some-other-secret-entirely-different".to_string();
    let token = generate_access_token("admin", "admin", &forged).unwrap();
    let response = get_auth(&app, "/api/bookings", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_admin_role_is_forbidden() {
    let app = build_test_app();
    let token = generate_access_token("viewer", "viewer", &test_jwt_config()).unwrap();

    let response = get_auth(&app, "/api/bookings", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");
}

#[tokio::test]
async fn catalog_writes_require_admin() {
    let app = build_test_app();

    let response = post_json(&app, "/api/tours", tour_body("Druk Path Trek", "Trekking")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = admin_token(&app).await;
    let response =
        post_json_auth(&app, "/api/tours", tour_body("Druk Path Trek", "Trekking"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn admin_views_of_public_lists_need_a_token() {
    let app = build_test_app();

    for uri in [
        "/api/tours?includeInactive=true",
        "/api/testimonials?includeInactive=true",
        "/api/blog?includeUnpublished=true",
    ] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }

    let token = admin_token(&app).await;
    let response = get_auth(&app, "/api/tours?includeInactive=true", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn public_routes_reject_a_bad_token_instead_of_ignoring_it() {
    let app = build_test_app();
    let response = get_auth(&app, "/api/tours", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
