//! Handlers for the `/testimonials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::error::CoreError;
use tourdesk_core::types::DbId;
use tourdesk_db::models::testimonial::{Testimonial, TestimonialFilter};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::MaybeAdmin;
use crate::middleware::rbac::RequireAdmin;
use crate::query::IncludeInactiveParams;
use crate::services::catalog;
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list(
    State(state): State<AppState>,
    caller: MaybeAdmin,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<Vec<Testimonial>>> {
    if params.include_inactive && !caller.is_admin() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Admin token required to list inactive testimonials".into(),
        )));
    }
    let filter = TestimonialFilter {
        include_inactive: params.include_inactive,
    };
    let testimonials = catalog::list_testimonials(state.store.as_ref(), &filter).await?;
    Ok(Json(testimonials))
}

/// POST /api/testimonials
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let testimonial = catalog::create_testimonial(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PATCH /api/testimonials/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<Testimonial>> {
    let testimonial = catalog::update_testimonial(state.store.as_ref(), id, body).await?;
    Ok(Json(testimonial))
}
