//! Route definitions for the `/inquiries` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::inquiry;
use crate::state::AppState;

/// Routes mounted at `/inquiries`.
///
/// ```text
/// POST   /               -> create
/// GET    /               -> list (admin)
/// GET    /{id}           -> get_by_id (admin)
/// PATCH  /{id}/status    -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(inquiry::list).post(inquiry::create))
        .route("/{id}", get(inquiry::get_by_id))
        .route("/{id}/status", patch(inquiry::update_status))
}
