//! Handlers for the `/blog` resource.
//!
//! The public sees published posts only; an admin token unlocks drafts via
//! `includeUnpublished=true` on the listing and on direct reads.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tourdesk_core::error::CoreError;
use tourdesk_core::types::DbId;
use tourdesk_db::models::blog_post::{BlogPost, BlogPostFilter};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::MaybeAdmin;
use crate::middleware::rbac::RequireAdmin;
use crate::query::BlogListParams;
use crate::services::catalog;
use crate::state::AppState;

/// GET /api/blog
pub async fn list(
    State(state): State<AppState>,
    caller: MaybeAdmin,
    Query(params): Query<BlogListParams>,
) -> AppResult<Json<Vec<BlogPost>>> {
    require_admin_for_drafts(&params, &caller)?;
    let filter = BlogPostFilter {
        include_unpublished: params.include_unpublished,
    };
    let posts = catalog::list_posts(state.store.as_ref(), &filter).await?;
    Ok(Json(posts))
}

/// GET /api/blog/{id}?includeUnpublished=
///
/// A draft is 404 unless an admin asks for it with `includeUnpublished=true`.
pub async fn get_by_id(
    State(state): State<AppState>,
    caller: MaybeAdmin,
    Path(id): Path<DbId>,
    Query(params): Query<BlogListParams>,
) -> AppResult<Json<BlogPost>> {
    require_admin_for_drafts(&params, &caller)?;
    let post = catalog::get_post(state.store.as_ref(), id, params.include_unpublished).await?;
    Ok(Json(post))
}

fn require_admin_for_drafts(params: &BlogListParams, caller: &MaybeAdmin) -> AppResult<()> {
    if params.include_unpublished && !caller.is_admin() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Admin token required to read unpublished posts".into(),
        )));
    }
    Ok(())
}

/// POST /api/blog
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<BlogPost>)> {
    let post = catalog::create_post(state.store.as_ref(), body).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// PATCH /api/blog/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(body): JsonBody,
) -> AppResult<Json<BlogPost>> {
    let post = catalog::update_post(state.store.as_ref(), id, body).await?;
    Ok(Json(post))
}
