//! Route definitions for itineraries and their days.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::itinerary;
use crate::state::AppState;

/// Itinerary routes, merged at the API root since days live under two
/// prefixes.
///
/// ```text
/// GET    /itineraries                -> list
/// POST   /itineraries                -> create
/// GET    /itineraries/{id}           -> get_by_id
/// PUT    /itineraries/{id}           -> update
/// DELETE /itineraries/{id}           -> delete
///
/// GET    /itineraries/{id}/days      -> list_days
/// POST   /itineraries/{id}/days      -> create_day
/// PUT    /itinerary-days/{id}        -> update_day
/// DELETE /itinerary-days/{id}        -> delete_day
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/itineraries",
            get(itinerary::list).post(itinerary::create),
        )
        .route(
            "/itineraries/{id}",
            get(itinerary::get_by_id)
                .put(itinerary::update)
                .delete(itinerary::delete),
        )
        .route(
            "/itineraries/{id}/days",
            get(itinerary::list_days).post(itinerary::create_day),
        )
        .route(
            "/itinerary-days/{id}",
            put(itinerary::update_day).delete(itinerary::delete_day),
        )
}
