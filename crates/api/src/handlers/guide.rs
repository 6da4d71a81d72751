//! Handlers for the `/guides` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::types::DbId;
use tourdesk_db::models::guide::{Guide, GuideFilter};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::middleware::rbac::RequireAdmin;
use crate::query::GuideListParams;
use crate::response::GuideRegistrationResponse;
use crate::services::guide;
use crate::state::AppState;

/// POST /api/guides/register
///
/// Public registration form for guides and drivers. Requires a matching
/// `confirmEmail`.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<GuideRegistrationResponse>)> {
    let guide = guide::register(state.store.as_ref(), body).await?;
    Ok((
        StatusCode::CREATED,
        Json(GuideRegistrationResponse {
            message: guide::REGISTRATION_MESSAGE,
            guide,
        }),
    ))
}

/// GET /api/guides?type=guide|driver
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<GuideListParams>,
) -> AppResult<Json<Vec<Guide>>> {
    let filter = GuideFilter {
        registration_type: params.registration_type,
    };
    let guides = guide::list(state.store.as_ref(), &filter).await?;
    Ok(Json(guides))
}

/// GET /api/guides/{id}
pub async fn get_by_id(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Guide>> {
    let guide = guide::get(state.store.as_ref(), id).await?;
    Ok(Json(guide))
}

/// PATCH /api/guides/{id}/status
pub async fn update_status(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Guide>> {
    let guide = guide::update_status(state.store.as_ref(), id, body).await?;
    Ok(Json(guide))
}
