//! Status lifecycle rules per entity.
//!
//! Statuses are stored as plain strings; each submodule names the valid
//! values and which changes between them are allowed. Repositories never
//! consult these rules themselves, the service layer does before writing.

pub mod booking;
pub mod custom_tour;
pub mod guide;
pub mod inquiry;
pub mod itinerary;

use crate::error::CoreError;

/// Check `status` against a closed set, reporting the failure on the
/// `status` field.
pub(crate) fn require_member(
    entity: &str,
    status: &str,
    valid: &'static [&'static str],
) -> Result<(), CoreError> {
    if valid.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::invalid(
            "status",
            format!("Invalid {entity} status '{status}'. Must be one of: {valid:?}"),
        ))
    }
}
