//! Request extractors with JSON error rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

/// A request body that parsed as JSON, not yet validated against any
/// schema. Malformed bodies are rejected as `BAD_REQUEST` in the usual
/// error envelope rather than axum's plain-text rejection.
#[derive(Debug, Deserialize, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody(pub Value);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
