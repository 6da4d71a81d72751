//! tourdesk API server library.
//!
//! Exposes the building blocks (config, state, error handling, auth,
//! services, routes) so integration tests and the binary entrypoint can
//! both assemble the same application.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
