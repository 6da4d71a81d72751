//! Handlers for the `/custom-tours` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::types::DbId;
use tourdesk_db::models::custom_tour_request::CustomTourRequest;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::services::custom_tour;
use crate::state::AppState;

/// POST /api/custom-tours
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<CustomTourRequest>)> {
    let request = custom_tour::create(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// GET /api/custom-tours
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CustomTourRequest>>> {
    let requests = custom_tour::list(state.store.as_ref()).await?;
    Ok(Json(requests))
}

/// GET /api/custom-tours/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CustomTourRequest>> {
    let request = custom_tour::get(state.store.as_ref(), id).await?;
    Ok(Json(request))
}

/// PUT /api/custom-tours/{id}
///
/// Admin handling: status, notes, price estimate, itinerary assignment, or
/// corrections to the submitted fields.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<CustomTourRequest>> {
    let request = custom_tour::update(state.store.as_ref(), id, body).await?;
    Ok(Json(request))
}
