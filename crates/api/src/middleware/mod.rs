//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller identity from a Bearer token.
//! - [`auth::MaybeAdmin`] -- Optional identity for public routes with admin views.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.

pub mod auth;
pub mod rbac;
