//! Custom tour request status and preference constants.
//!
//! Status updates are free-form within [`VALID_STATUSES`]; there is no
//! transition graph.

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";
pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// All valid custom tour request statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_APPROVED,
    STATUS_REJECTED,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
];

/// Accepted `accommodationType` values.
pub const ACCOMMODATION_TYPES: &[&str] = &["luxury", "standard", "budget"];

/// Accepted `transportPreference` values.
pub const TRANSPORT_PREFERENCES: &[&str] = &["private", "shared", "mixed"];

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    super::require_member("custom tour request", status, VALID_STATUSES)
}
