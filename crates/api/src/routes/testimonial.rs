//! Route definitions for the `/testimonials` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::testimonial;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create (admin)
/// PATCH  /{id}    -> update (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonial::list).post(testimonial::create))
        .route("/{id}", patch(testimonial::update))
}
