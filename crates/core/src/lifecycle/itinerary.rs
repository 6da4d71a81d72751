//! Itinerary status constants and capacity/date invariants.

use crate::error::CoreError;
use crate::types::Date;
use crate::validation::FieldError;

/// Initial status for a newly created itinerary.
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid itinerary statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_COMPLETED, STATUS_CANCELLED];

/// Default participant cap when none is given.
pub const DEFAULT_MAX_PARTICIPANTS: i32 = 12;

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    super::require_member("itinerary", status, VALID_STATUSES)
}

/// Check the structural invariants of an itinerary's dates and capacity.
///
/// Returns every violated invariant so callers can merge them into a
/// larger error list.
pub fn invariant_errors(
    start_date: Date,
    end_date: Date,
    max_participants: i32,
    current_participants: i32,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if start_date > end_date {
        errors.push(FieldError::new("endDate", "must not be before startDate"));
    }
    if current_participants > max_participants {
        errors.push(FieldError::new(
            "currentParticipants",
            format!("must not exceed maxParticipants ({max_participants})"),
        ));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        Date::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn same_day_trip_is_valid() {
        assert!(invariant_errors(date("2025-05-01"), date("2025-05-01"), 12, 0).is_empty());
    }

    #[test]
    fn reversed_dates_are_reported_on_end_date() {
        let errors = invariant_errors(date("2025-05-10"), date("2025-05-01"), 12, 0);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "endDate");
    }

    #[test]
    fn overbooking_is_reported() {
        let errors = invariant_errors(date("2025-05-01"), date("2025-05-03"), 4, 5);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "currentParticipants");
    }

    #[test]
    fn status_set() {
        assert!(validate_status(STATUS_CANCELLED).is_ok());
        assert!(validate_status("paused").is_err());
    }
}
