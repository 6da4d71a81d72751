//! Request handlers, one submodule per resource.
//!
//! Handlers extract path, query and body, enforce access through the
//! extractors in [`crate::middleware`], and delegate to [`crate::services`].

pub mod admin;
pub mod blog;
pub mod booking;
pub mod custom_tour;
pub mod guide;
pub mod inquiry;
pub mod itinerary;
pub mod testimonial;
pub mod tour;
