//! Handlers for the `/inquiries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::types::DbId;
use tourdesk_db::models::inquiry::Inquiry;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::services::inquiry;
use crate::state::AppState;

/// POST /api/inquiries
///
/// Public contact form. The inquiry starts `new`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Inquiry>)> {
    let inquiry = inquiry::create(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// GET /api/inquiries
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Inquiry>>> {
    let inquiries = inquiry::list(state.store.as_ref()).await?;
    Ok(Json(inquiries))
}

/// GET /api/inquiries/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = inquiry::get(state.store.as_ref(), id).await?;
    Ok(Json(inquiry))
}

/// PATCH /api/inquiries/{id}/status
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Inquiry>> {
    let inquiry = inquiry::update_status(state.store.as_ref(), id, body).await?;
    Ok(Json(inquiry))
}
