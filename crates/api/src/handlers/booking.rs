//! Handlers for the `/bookings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::types::DbId;
use tourdesk_db::models::booking::Booking;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::services::booking;
use crate::state::AppState;

/// POST /api/bookings
///
/// Public booking form. The booking starts `pending`.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = booking::create(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = booking::list(state.store.as_ref()).await?;
    Ok(Json(bookings))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Booking>> {
    let booking = booking::get(state.store.as_ref(), id).await?;
    Ok(Json(booking))
}

/// PATCH /api/bookings/{id}/status
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Booking>> {
    let booking = booking::update_status(state.store.as_ref(), id, body).await?;
    Ok(Json(booking))
}
