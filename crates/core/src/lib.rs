//! Domain core for the tourdesk booking service.
//!
//! Pure logic only: shared types, the error taxonomy, raw-input validation
//! and the status lifecycle rules. Nothing in here touches storage or HTTP.

pub mod error;
pub mod lifecycle;
pub mod types;
pub mod validation;
