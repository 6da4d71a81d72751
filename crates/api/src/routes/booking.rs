//! Route definitions for the `/bookings` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::booking;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /               -> create
/// GET    /               -> list (admin)
/// GET    /{id}           -> get_by_id (admin)
/// PATCH  /{id}/status    -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(booking::list).post(booking::create))
        .route("/{id}", get(booking::get_by_id))
        .route("/{id}/status", patch(booking::update_status))
}
