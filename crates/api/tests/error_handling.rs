//! Tests for `AppError` → HTTP response mapping.
//!
//! Most tests call `IntoResponse` directly on `AppError` values; the last
//! ones go through the router to check extractor rejections.

mod common;

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use tourdesk_api::error::AppError;
use tourdesk_core::error::CoreError;
use tourdesk_core::validation::FieldError;
use tourdesk_db::StoreError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "booking",
        id: 7,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "booking with id 7 not found");
}

#[tokio::test]
async fn validation_error_lists_every_field() {
    let err = AppError::Core(CoreError::Validation(vec![
        FieldError::new("email", "must be a valid email address"),
        FieldError::new("groupSize", "must be at least 1"),
    ]));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["errors"],
        json!([
            { "field": "email", "message": "must be a valid email address" },
            { "field": "groupSize", "message": "must be at least 1" }
        ])
    );
    assert!(json["error"].as_str().unwrap().starts_with("Validation failed"));
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("already has a day 1".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "already has a day 1");
}

#[tokio::test]
async fn unauthorized_and_forbidden_map_to_401_and_403() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");

    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("admins only".into()))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn store_failures_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::Store(StoreError::SequenceExhausted("tour"))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");

    let (status, json) =
        error_to_response(AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[test]
fn core_errors_convert_into_app_errors() {
    let err: AppError = CoreError::invalid("status", "unknown").into();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}

#[tokio::test]
async fn malformed_json_is_rejected_with_error_envelope() {
    let app = common::build_test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/inquiries")
        .header("Content-Type", "application/json")
        .body(Body::from("{\"firstName\": "))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn non_object_body_is_a_validation_error() {
    let app = common::build_test_app();
    let response = common::post_json(&app, "/api/inquiries", json!([1, 2, 3])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(common::error_fields(&json), vec!["body"]);
}
