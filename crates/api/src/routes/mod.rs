pub mod admin;
pub mod blog;
pub mod booking;
pub mod custom_tour;
pub mod guide;
pub mod health;
pub mod inquiry;
pub mod itinerary;
pub mod testimonial;
pub mod tour;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/login                          admin login (public)
///
/// /tours                                list (public), create (admin)
/// /tours/{id}                           get (public), update (admin)
///
/// /bookings                             create (public), list (admin)
/// /bookings/{id}                        get (admin)
/// /bookings/{id}/status                 change status (admin)
///
/// /inquiries                            create (public), list (admin)
/// /inquiries/{id}                       get (admin)
/// /inquiries/{id}/status                change status (admin)
///
/// /testimonials                         list (public), create (admin)
/// /testimonials/{id}                    update (admin)
///
/// /blog                                 list published (public), create (admin)
/// /blog/{id}                            get published (public), update (admin)
///
/// /guides/register                      register (public)
/// /guides                               list, ?type= (admin)
/// /guides/{id}                          get (admin)
/// /guides/{id}/status                   change status (admin)
///
/// /itineraries                          list, create (admin)
/// /itineraries/{id}                     get with days, update, delete (admin)
/// /itineraries/{id}/days                list, add day (admin)
/// /itinerary-days/{id}                  update, delete (admin)
///
/// /custom-tours                         create (public), list (admin)
/// /custom-tours/{id}                    get, update (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router())
        .nest("/tours", tour::router())
        .nest("/bookings", booking::router())
        .nest("/inquiries", inquiry::router())
        .nest("/testimonials", testimonial::router())
        .nest("/blog", blog::router())
        .nest("/guides", guide::router())
        .merge(itinerary::router())
        .nest("/custom-tours", custom_tour::router())
}
