//! Typed parsing on top of the raw field pass.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use super::rules::{check_fields, FieldSpec, Mode};
use super::{camel_case, FieldError};

/// An input DTO that can be parsed from raw JSON.
///
/// `FIELDS` drives the raw pass; constraints that need the typed value
/// (ranges, email syntax, matching fields) live on the `Validate` derive,
/// and checks that need custom logic (several fields, closed value sets)
/// go in [`semantic_errors`].
///
/// [`semantic_errors`]: InputSchema::semantic_errors
pub trait InputSchema: DeserializeOwned + Validate {
    const FIELDS: &'static [FieldSpec];

    /// Wire names that may never appear in a patch body.
    const IMMUTABLE: &'static [&'static str] = &[];

    fn semantic_errors(&self) -> Vec<FieldError> {
        Vec::new()
    }
}

/// Parse a creation payload. Required fields must be present and list
/// fields default to empty.
pub fn parse_create<T: InputSchema>(raw: Value) -> Result<T, Vec<FieldError>> {
    let mut data = into_object(raw)?;
    let errors = check_fields(&mut data, T::FIELDS, Mode::Create);
    finish(data, errors)
}

/// Parse a partial update. Absent fields are left alone; immutable fields
/// are rejected outright.
pub fn parse_patch<T: InputSchema>(raw: Value) -> Result<T, Vec<FieldError>> {
    let mut data = into_object(raw)?;
    let mut errors: Vec<FieldError> = T::IMMUTABLE
        .iter()
        .filter(|name| data.contains_key(**name))
        .map(|name| FieldError::new(name, "cannot be changed"))
        .collect();
    errors.extend(check_fields(&mut data, T::FIELDS, Mode::Patch));
    finish(data, errors)
}

fn into_object(raw: Value) -> Result<Map<String, Value>, Vec<FieldError>> {
    match raw {
        Value::Object(map) => Ok(map),
        _ => Err(vec![FieldError::new("body", "must be a JSON object")]),
    }
}

fn finish<T: InputSchema>(
    data: Map<String, Value>,
    errors: Vec<FieldError>,
) -> Result<T, Vec<FieldError>> {
    if !errors.is_empty() {
        return Err(errors);
    }

    let input: T = serde_json::from_value(Value::Object(data))
        .map_err(|e| vec![FieldError::new("body", e.to_string())])?;

    let mut errors = match input.validate() {
        Ok(()) => Vec::new(),
        Err(violations) => collect_violations(&violations),
    };
    errors.extend(input.semantic_errors());

    if errors.is_empty() {
        Ok(input)
    } else {
        Err(errors)
    }
}

/// Flatten `validator` output into field errors, ordered by field name.
fn collect_violations(violations: &ValidationErrors) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (field, field_errors) in violations.field_errors() {
        for err in field_errors.iter() {
            let message = match &err.message {
                Some(message) => message.to_string(),
                None => format!("failed {} check", err.code),
            };
            errors.push(FieldError {
                field: camel_case(&field),
                message,
            });
        }
    }
    errors.sort_by(|a, b| a.field.cmp(&b.field));
    errors
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::validation::FieldKind;

    #[derive(Debug, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct Signup {
        #[validate(email(message = "must be a valid email address"))]
        email: String,
        #[validate(must_match(other = "email", message = "must match email"))]
        confirm_email: String,
        #[validate(range(min = 1, message = "must be at least 1"))]
        group_size: i32,
        #[serde(default)]
        interests: Vec<String>,
        nights: Option<i32>,
    }

    impl InputSchema for Signup {
        const FIELDS: &'static [FieldSpec] = &[
            FieldSpec::required("email", FieldKind::Text),
            FieldSpec::required("confirmEmail", FieldKind::Text),
            FieldSpec::required("groupSize", FieldKind::Integer),
            FieldSpec::optional("interests", FieldKind::TextList),
            FieldSpec::optional("nights", FieldKind::Integer),
        ];
        const IMMUTABLE: &'static [&'static str] = &["id"];

        fn semantic_errors(&self) -> Vec<FieldError> {
            match self.nights {
                Some(n) if n > 30 => vec![FieldError::new("nights", "must be at most 30")],
                _ => Vec::new(),
            }
        }
    }

    #[test]
    fn valid_input_parses_with_defaults() {
        let input: Signup = parse_create(json!({
            "email": "a@b.com", "confirmEmail": "a@b.com", "groupSize": "3"
        }))
        .unwrap();
        assert_eq!(input.group_size, 3);
        assert!(input.interests.is_empty());
        assert_eq!(input.nights, None);
    }

    #[test]
    fn mismatched_confirmation_is_attached_to_confirmation_field() {
        let errors = parse_create::<Signup>(json!({
            "email": "a@b.com", "confirmEmail": "x@b.com", "groupSize": 2
        }))
        .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("confirmEmail", "must match email")]);
    }

    #[test]
    fn constraint_violations_are_collected() {
        let errors = parse_create::<Signup>(json!({
            "email": "not-an-email", "confirmEmail": "not-an-email", "groupSize": 0, "nights": 40
        }))
        .unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "groupSize", "nights"]);
    }

    #[test]
    fn raw_errors_short_circuit_typed_checks() {
        let errors = parse_create::<Signup>(json!({ "groupSize": "many" })).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "confirmEmail", "groupSize"]);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = parse_create::<Signup>(json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("body", "must be a JSON object")]);
    }

    #[derive(Debug, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct Rename {
        name: Option<String>,
    }

    impl InputSchema for Rename {
        const FIELDS: &'static [FieldSpec] = &[FieldSpec::required("name", FieldKind::Text)];
        const IMMUTABLE: &'static [&'static str] = &["id", "createdAt"];
    }

    #[test]
    fn patch_rejects_immutable_fields() {
        let errors = parse_patch::<Rename>(json!({ "id": 9, "name": "x" })).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("id", "cannot be changed")]);
    }

    #[test]
    fn patch_allows_absent_required_fields() {
        let patch: Rename = parse_patch(json!({})).unwrap();
        assert_eq!(patch.name, None);
    }
}
