//! Route definitions for the `/tours` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tour;
use crate::state::AppState;

/// Routes mounted at `/tours`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (admin)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tour::list).post(tour::create))
        .route("/{id}", get(tour::get_by_id).put(tour::update))
}
