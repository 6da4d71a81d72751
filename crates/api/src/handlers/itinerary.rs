//! Handlers for the `/itineraries` and `/itinerary-days` resources.
//!
//! Days are created and listed under their itinerary:
//! `/itineraries/{id}/days`, and edited or removed directly:
//! `/itinerary-days/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::types::DbId;
use tourdesk_db::models::itinerary::Itinerary;
use tourdesk_db::models::itinerary_day::ItineraryDay;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{ItineraryDetail, MessageResponse};
use crate::services::itinerary;
use crate::state::AppState;

/// POST /api/itineraries
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Itinerary>)> {
    let itinerary = itinerary::create(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(itinerary)))
}

/// GET /api/itineraries
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Itinerary>>> {
    let itineraries = itinerary::list(state.store.as_ref()).await?;
    Ok(Json(itineraries))
}

/// GET /api/itineraries/{id}
///
/// The itinerary with its days inlined under `days`.
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ItineraryDetail>> {
    let (itinerary, days) = itinerary::get_with_days(state.store.as_ref(), id).await?;
    Ok(Json(ItineraryDetail { itinerary, days }))
}

/// PUT /api/itineraries/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Itinerary>> {
    let itinerary = itinerary::update(state.store.as_ref(), id, body).await?;
    Ok(Json(itinerary))
}

/// DELETE /api/itineraries/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    itinerary::delete(state.store.as_ref(), id).await?;
    Ok(Json(MessageResponse::new("Itinerary deleted successfully")))
}

// ---------------------------------------------------------------------------
// Days
// ---------------------------------------------------------------------------

/// GET /api/itineraries/{id}/days
pub async fn list_days(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(itinerary_id): Path<DbId>,
) -> AppResult<Json<Vec<ItineraryDay>>> {
    let days = itinerary::list_days(state.store.as_ref(), itinerary_id).await?;
    Ok(Json(days))
}

/// POST /api/itineraries/{id}/days
pub async fn create_day(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(itinerary_id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<ItineraryDay>)> {
    let day = itinerary::create_day(state.store.as_ref(), itinerary_id, body).await?;
    Ok((StatusCode::CREATED, Json(day)))
}

/// PUT /api/itinerary-days/{id}
pub async fn update_day(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<ItineraryDay>> {
    let day = itinerary::update_day(state.store.as_ref(), id, body).await?;
    Ok(Json(day))
}

/// DELETE /api/itinerary-days/{id}
pub async fn delete_day(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    itinerary::delete_day(state.store.as_ref(), id).await?;
    Ok(Json(MessageResponse::new("Itinerary day deleted successfully")))
}
