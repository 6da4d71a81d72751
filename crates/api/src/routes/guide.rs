//! Route definitions for the `/guides` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::guide;
use crate::state::AppState;

/// Routes mounted at `/guides`.
///
/// ```text
/// POST   /register       -> register
/// GET    /               -> list (admin)
/// GET    /{id}           -> get_by_id (admin)
/// PATCH  /{id}/status    -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(guide::register))
        .route("/", get(guide::list))
        .route("/{id}", get(guide::get_by_id))
        .route("/{id}/status", patch(guide::update_status))
}
