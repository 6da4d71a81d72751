use crate::types::DbId;
use crate::validation::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldError>),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a validation failure on a single field.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        CoreError::Validation(vec![FieldError::new(field, message)])
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn validation_display_lists_every_field() {
        let err = CoreError::Validation(vec![
            FieldError::new("email", "must be a valid email address"),
            FieldError::new("groupSize", "must be at least 1"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: email: must be a valid email address; groupSize: must be at least 1"
        );
    }

    #[test]
    fn invalid_builds_single_field_error() {
        assert_matches!(
            CoreError::invalid("status", "unknown"),
            CoreError::Validation(errors) if errors.len() == 1 && errors[0].field == "status"
        );
    }
}
