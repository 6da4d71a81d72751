//! Handlers for the `/admin` resource.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tourdesk_core::error::CoreError;
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::LoginResponse;
use crate::services::create_input;
use crate::state::AppState;

/// Request body for `POST /admin/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub password: String,
}

impl InputSchema for LoginRequest {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::required("password", FieldKind::Text)];
}

/// POST /api/admin/login
///
/// Exchange the admin password for a bearer token.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<LoginResponse>> {
    let input: LoginRequest = create_input(body)?;

    let Some(hash) = state.config.admin_password_hash.as_deref() else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Admin login is not configured".into(),
        )));
    };

    let valid = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !valid {
        tracing::warn!("Admin login rejected: wrong password");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let issued = state.auth.issue()?;
    tracing::info!(expires_in = issued.expires_in, "Admin logged in");

    Ok(Json(LoginResponse {
        token: issued.token,
        expires_in: issued.expires_in,
    }))
}
