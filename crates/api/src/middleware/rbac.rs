//! Admin gate for handler signatures.
//!
//! The service issues a single role, so there is one guard: a handler that
//! takes [`RequireAdmin`] never runs for anyone else.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tourdesk_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated caller holding the `admin` role.
///
/// No token, or a bad one, is 401 (from [`AuthUser`]); a valid token for
/// any other role is 403.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.is_admin() {
            return Ok(RequireAdmin(user));
        }

        tracing::warn!(
            subject = %user.subject,
            role = %user.role,
            method = %parts.method,
            path = %parts.uri.path(),
            "Non-admin token used on an admin route",
        );
        Err(CoreError::Forbidden("Admin role required".into()).into())
    }
}
