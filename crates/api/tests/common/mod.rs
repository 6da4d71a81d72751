#![allow(dead_code)]

use std::sync::{Arc, OnceLock};

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tourdesk_api::auth::jwt::JwtConfig;
use tourdesk_api::auth::password::hash_password;
use tourdesk_api::auth::JwtAuthenticator;
use tourdesk_api::config::{LogFormat, ServerConfig, StorageConfig};
use tourdesk_api::router::build_app_router;
use tourdesk_api::state::AppState;
use tourdesk_db::{MemStorage, Storage};

/// Plaintext admin password accepted by [`build_test_app`].
pub const ADMIN_PASSWORD: &str = "tiger-nest-2025";

/// Argon2 hashing is slow in debug builds; hash once per test binary.
fn admin_password_hash() -> String {
    static HASH: OnceLock<String> = OnceLock::new();
    HASH.get_or_init(|| hash_password(ADMIN_PASSWORD).expect("hashing should succeed"))
        .clone()
}

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// in-memory storage and no seeding.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig::Memory,
        seed_sample_data: false,
        admin_password_hash: Some(admin_password_hash()),
        log_format: LogFormat::Text,
        jwt: test_jwt_config(),
    }
}

/// Build the full application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

/// Build the full application router with a custom configuration.
pub fn build_test_app_with(config: ServerConfig) -> Router {
    build_test_app_over(Arc::new(MemStorage::new()), config)
}

/// Build the full application router over a caller-supplied store.
pub fn build_test_app_over(store: Arc<dyn Storage>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
        auth: Arc::new(JwtAuthenticator::new(config.jwt.clone())),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(app: &Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(app: &Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn patch_json_auth(app: &Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: &Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, Some(token)).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Field names of a `VALIDATION_ERROR` body, in order.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .expect("validation body should carry an errors array")
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Log in through the API and return the bearer token.
pub async fn admin_token(app: &Router) -> String {
    let response = post_json(app, "/api/admin/login", json!({ "password": ADMIN_PASSWORD })).await;
    assert_eq!(response.status(), 200, "admin login should succeed");
    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

pub fn tour_body(name: &str, category: &str) -> Value {
    json!({
        "name": name,
        "description": "Valleys, dzongs and high passes",
        "duration": 7,
        "price": 2450,
        "category": category,
        "imageUrl": "https://images.example.com/tour.jpg"
    })
}

/// Create a tour through the admin API and return its id.
pub async fn create_tour(app: &Router, token: &str, name: &str, category: &str) -> i64 {
    let response = post_json_auth(app, "/api/tours", tour_body(name, category), token).await;
    assert_eq!(response.status(), 201, "tour creation should succeed");
    body_json(response).await["id"].as_i64().unwrap()
}

pub fn guide_body(name: &str, email: &str, registration_type: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "confirmEmail": email,
        "phone": "+975 17 123 456",
        "licenseImageUrl": "https://images.example.com/license.jpg",
        "registrationType": registration_type
    })
}

/// Register a guide through the public form and return its id.
pub async fn register_guide(app: &Router, name: &str, email: &str, registration_type: &str) -> i64 {
    let response = post_json(app, "/api/guides/register", guide_body(name, email, registration_type)).await;
    assert_eq!(response.status(), 201, "guide registration should succeed");
    body_json(response).await["guide"]["id"].as_i64().unwrap()
}

pub fn itinerary_body(tour_id: i64) -> Value {
    json!({
        "tourId": tour_id,
        "name": "Spring departure",
        "startDate": "2025-04-01",
        "endDate": "2025-04-07",
        "maxParticipants": 10
    })
}
