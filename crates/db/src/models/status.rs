//! The body of every `PATCH .../status` endpoint.

use serde::Deserialize;
use tourdesk_core::validation::{FieldKind, FieldSpec, InputSchema};
use validator::Validate;

/// `{"status": "..."}`. Membership in the entity's status set is checked
/// by the lifecycle rules, not here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StatusUpdate {
    pub status: String,
}

impl InputSchema for StatusUpdate {
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::required("status", FieldKind::Text)];
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tourdesk_core::validation::{parse_create, FieldError};

    use super::*;

    #[test]
    fn missing_status_is_required() {
        let errors = parse_create::<StatusUpdate>(json!({})).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("status", "is required")]);
    }

    #[test]
    fn status_is_read() {
        let update: StatusUpdate = parse_create(json!({ "status": "approved" })).unwrap();
        assert_eq!(update.status, "approved");
    }
}
