//! Validation layer: turns untrusted JSON input into typed values.
//!
//! Validation runs in two passes. The [`rules`] pass walks the raw JSON
//! object against a per-entity field table (presence, JSON type, non-empty
//! strings, list defaults). The [`evaluator`] then deserializes into the
//! target DTO and runs its `validator` constraints plus any cross-field
//! checks. Either pass yields a list of [`FieldError`]s instead of failing
//! fast, so callers can report every problem at once.

pub mod evaluator;
pub mod rules;

use serde::{Deserialize, Serialize};

pub use evaluator::{parse_create, parse_patch, InputSchema};
pub use rules::{FieldKind, FieldSpec};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Wire name of the offending field (camelCase), or `body` for the
    /// request as a whole.
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Convert a Rust field name (`group_size`) into its wire name (`groupSize`).
///
/// Names without underscores are returned unchanged.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_converts_snake_names() {
        assert_eq!(camel_case("group_size"), "groupSize");
        assert_eq!(camel_case("license_image_url"), "licenseImageUrl");
    }

    #[test]
    fn camel_case_keeps_wire_names() {
        assert_eq!(camel_case("confirmEmail"), "confirmEmail");
        assert_eq!(camel_case("email"), "email");
    }
}
