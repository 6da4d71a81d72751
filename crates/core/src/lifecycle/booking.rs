//! Booking status constants and transition rules.

use crate::error::CoreError;

/// Every new booking starts here.
pub const STATUS_PENDING: &str = "pending";
/// Confirmed by an admin.
pub const STATUS_APPROVED: &str = "approved";
/// Declined by an admin.
pub const STATUS_REJECTED: &str = "rejected";
/// Withdrawn before the trip.
pub const STATUS_CANCELLED: &str = "cancelled";
/// The trip took place.
pub const STATUS_COMPLETED: &str = "completed";

/// All valid booking statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_CANCELLED,
    STATUS_COMPLETED,
];

/// Returns the set of statuses that `from_status` may transition to.
///
/// - `pending`  -> `approved`, `rejected`, `cancelled`
/// - `approved` -> `cancelled`, `completed`
/// - `rejected`, `cancelled`, `completed` are terminal
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PENDING => &[STATUS_APPROVED, STATUS_REJECTED, STATUS_CANCELLED],
        STATUS_APPROVED => &[STATUS_CANCELLED, STATUS_COMPLETED],
        _ => &[],
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    super::require_member("booking", status, VALID_STATUSES)
}

/// Validate a requested change from `current` to `next`.
///
/// An unknown `next` is a validation error; a known but disallowed change
/// is a conflict with the booking's current state.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    validate_status(next)?;
    let allowed = valid_transitions(current);
    if allowed.contains(&next) {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Cannot transition booking from '{current}' to '{next}'. Allowed transitions: {allowed:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "Status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        assert_matches!(
            validate_transition(STATUS_PENDING, "shipped"),
            Err(CoreError::Validation(_))
        );
        assert!(validate_status("").is_err());
    }

    #[test]
    fn pending_can_be_decided_or_cancelled() {
        assert!(validate_transition(STATUS_PENDING, STATUS_APPROVED).is_ok());
        assert!(validate_transition(STATUS_PENDING, STATUS_REJECTED).is_ok());
        assert!(validate_transition(STATUS_PENDING, STATUS_CANCELLED).is_ok());
        assert!(validate_transition(STATUS_PENDING, STATUS_COMPLETED).is_err());
    }

    #[test]
    fn approved_can_be_cancelled_or_completed() {
        assert!(validate_transition(STATUS_APPROVED, STATUS_CANCELLED).is_ok());
        assert!(validate_transition(STATUS_APPROVED, STATUS_COMPLETED).is_ok());
        assert_matches!(
            validate_transition(STATUS_APPROVED, STATUS_PENDING),
            Err(CoreError::Conflict(_))
        );
    }

    #[test]
    fn terminal_statuses_allow_nothing() {
        for from in [STATUS_REJECTED, STATUS_CANCELLED, STATUS_COMPLETED] {
            for to in VALID_STATUSES {
                assert!(validate_transition(from, to).is_err(), "{from} -> {to}");
            }
        }
    }
}
