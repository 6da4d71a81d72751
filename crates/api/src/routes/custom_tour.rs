//! Route definitions for the `/custom-tours` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::custom_tour;
use crate::state::AppState;

/// Routes mounted at `/custom-tours`.
///
/// ```text
/// POST   /        -> create
/// GET    /        -> list (admin)
/// GET    /{id}    -> get_by_id (admin)
/// PUT    /{id}    -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(custom_tour::list).post(custom_tour::create))
        .route("/{id}", get(custom_tour::get_by_id).put(custom_tour::update))
}
