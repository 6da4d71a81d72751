//! Handlers for the `/tours` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::error::CoreError;
use tourdesk_core::types::DbId;
use tourdesk_db::models::tour::{Tour, TourFilter};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::MaybeAdmin;
use crate::middleware::rbac::RequireAdmin;
use crate::query::TourListParams;
use crate::services::catalog;
use crate::state::AppState;

/// GET /api/tours?category=&includeInactive=
///
/// Active tours in insertion order. `includeInactive=true` needs an admin token.
pub async fn list(
    State(state): State<AppState>,
    caller: MaybeAdmin,
    Query(params): Query<TourListParams>,
) -> AppResult<Json<Vec<Tour>>> {
    if params.include_inactive && !caller.is_admin() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Admin token required to list inactive tours".into(),
        )));
    }
    let filter = TourFilter {
        category: params.category,
        include_inactive: params.include_inactive,
    };
    let tours = catalog::list_tours(state.store.as_ref(), &filter).await?;
    Ok(Json(tours))
}

/// GET /api/tours/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tour>> {
    let tour = catalog::get_tour(state.store.as_ref(), id).await?;
    Ok(Json(tour))
}

/// POST /api/tours
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Tour>)> {
    let tour = catalog::create_tour(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(tour)))
}

/// PUT /api/tours/{id}
///
/// Partial update; only the fields present in the body change.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Tour>> {
    let tour = catalog::update_tour(state.store.as_ref(), id, body).await?;
    Ok(Json(tour))
}
