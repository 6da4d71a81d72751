//! Guide/driver status and registration type constants.
//!
//! Guide status is set-enforced only: an admin may move a guide to any
//! member of [`VALID_STATUSES`]. Itinerary assignment additionally refuses
//! blacklisted guides, see [`validate_assignable`].

use crate::error::CoreError;
use crate::types::DbId;

/// Initial status for a newly registered guide or driver.
pub const STATUS_NOT_ASSIGNED: &str = "not_assigned";
/// Currently referenced by an itinerary.
pub const STATUS_ASSIGNED: &str = "assigned";
/// Barred from assignment.
pub const STATUS_BLACKLISTED: &str = "blacklisted";

/// All valid guide statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ASSIGNED, STATUS_NOT_ASSIGNED, STATUS_BLACKLISTED];

/// Registration type for tour guides.
pub const TYPE_GUIDE: &str = "guide";
/// Registration type for drivers.
pub const TYPE_DRIVER: &str = "driver";

/// All valid registration types.
pub const VALID_TYPES: &[&str] = &[TYPE_GUIDE, TYPE_DRIVER];

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    super::require_member("guide", status, VALID_STATUSES)
}

/// Validate a registration type (`guide` or `driver`).
pub fn validate_registration_type(registration_type: &str) -> Result<(), CoreError> {
    if VALID_TYPES.contains(&registration_type) {
        Ok(())
    } else {
        Err(CoreError::invalid(
            "registrationType",
            format!("Invalid registration type '{registration_type}'. Must be one of: {VALID_TYPES:?}"),
        ))
    }
}

/// Check that the guide referenced by `field` can be put on an itinerary.
pub fn validate_assignable(field: &str, guide_id: DbId, status: &str) -> Result<(), CoreError> {
    if status == STATUS_BLACKLISTED {
        return Err(CoreError::invalid(
            field,
            format!("Guide {guide_id} is blacklisted and cannot be assigned"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn statuses_outside_the_set_are_rejected() {
        assert!(validate_status("active").is_err());
        assert!(validate_status("ASSIGNED").is_err());
        assert!(validate_status("").is_err());
    }

    #[test]
    fn registration_types() {
        assert!(validate_registration_type(TYPE_GUIDE).is_ok());
        assert!(validate_registration_type(TYPE_DRIVER).is_ok());
        assert!(validate_registration_type("pilot").is_err());
    }

    #[test]
    fn blacklisted_guides_are_not_assignable() {
        assert!(validate_assignable("guideId", 3, STATUS_NOT_ASSIGNED).is_ok());
        assert!(validate_assignable("guideId", 3, STATUS_ASSIGNED).is_ok());
        assert!(validate_assignable("driverId", 3, STATUS_BLACKLISTED).is_err());
    }
}
