//! Inquiry status constants. Any status may follow any other.

use crate::error::CoreError;

/// Initial status for a newly submitted inquiry.
pub const STATUS_NEW: &str = "new";
/// Someone has replied to the customer.
pub const STATUS_CONTACTED: &str = "contacted";
/// No further follow-up needed.
pub const STATUS_CLOSED: &str = "closed";

/// All valid inquiry statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_CONTACTED, STATUS_CLOSED];

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    super::require_member("inquiry", status, VALID_STATUSES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_statuses() {
        assert!(validate_status(STATUS_CONTACTED).is_ok());
        assert!(validate_status("archived").is_err());
    }
}
