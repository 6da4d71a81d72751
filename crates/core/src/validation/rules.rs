//! Field tables and the raw (pre-deserialization) validation pass.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::FieldError;

/// Accepted wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The declared JSON shape of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string. Non-optional text must not be blank.
    Text,
    /// A whole number that fits in 32 bits. Numeric strings are accepted
    /// and normalised.
    Integer,
    /// A record identifier (64-bit). Numeric strings are accepted and
    /// normalised.
    Id,
    /// A decimal carried as a one-decimal string (`"4.9"`). Numbers and
    /// numeric strings are accepted and normalised.
    Decimal,
    /// `true`/`false`, or the strings `"true"`/`"false"`.
    Boolean,
    /// A `YYYY-MM-DD` date string.
    Date,
    /// A list of strings. Defaults to `[]` when absent on create.
    TextList,
}

/// Declaration of one input field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire (camelCase) name.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present on create, and must not be blank when it is text.
    pub required: bool,
    /// Inclusive bounds for a `Decimal`, checked before rounding.
    pub range: Option<(f64, f64)>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            range: None,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            range: None,
        }
    }

    /// Restrict a `Decimal` field to `min..=max`.
    pub const fn within(self, min: f64, max: f64) -> Self {
        Self {
            range: Some((min, max)),
            ..self
        }
    }
}

/// Whether the pass runs for a create (presence enforced) or a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Patch,
}

/// Check and normalise `data` in place against `specs`.
///
/// Fields not listed in `specs` are left untouched.
pub fn check_fields(data: &mut Map<String, Value>, specs: &[FieldSpec], mode: Mode) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for spec in specs {
        let current = data.get(spec.name).cloned();
        match current {
            None | Some(Value::Null) => {
                if mode == Mode::Create {
                    if spec.kind == FieldKind::TextList {
                        data.insert(spec.name.to_string(), Value::Array(Vec::new()));
                    } else if spec.required {
                        errors.push(FieldError::new(spec.name, "is required"));
                    }
                } else if spec.required && data.contains_key(spec.name) {
                    errors.push(FieldError::new(spec.name, "cannot be null"));
                }
            }
            Some(value) => match normalize(spec, &value) {
                Ok(Some(normalized)) => {
                    data.insert(spec.name.to_string(), normalized);
                }
                Ok(None) => {}
                Err(message) => errors.push(FieldError::new(spec.name, message)),
            },
        }
    }

    errors
}

/// Validate one present value. Returns a replacement value when the input
/// needs normalising.
fn normalize(spec: &FieldSpec, value: &Value) -> Result<Option<Value>, String> {
    match spec.kind {
        FieldKind::Text => match value {
            Value::String(s) if s.trim().is_empty() => {
                if spec.required {
                    Err("must not be empty".into())
                } else {
                    Ok(Some(Value::Null))
                }
            }
            Value::String(_) => Ok(None),
            _ => Err("must be a string".into()),
        },
        FieldKind::Integer => {
            let n = whole_number(value)?;
            if i32::try_from(n).is_err() {
                return Err(format!("must be between {} and {}", i32::MIN, i32::MAX));
            }
            Ok(Some(Value::from(n)))
        }
        FieldKind::Id => whole_number(value).map(|n| Some(Value::from(n))),
        FieldKind::Decimal => {
            let parsed = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            let v = match parsed {
                Some(v) if v.is_finite() => v,
                _ => return Err("must be a decimal number".into()),
            };
            if let Some((min, max)) = spec.range {
                if !(min..=max).contains(&v) {
                    return Err(format!("must be between {min} and {max}"));
                }
            }
            // Adding 0.0 turns a rounded -0.0 into 0.0.
            let rounded = (v * 10.0).round() / 10.0 + 0.0;
            Ok(Some(Value::String(format!("{rounded:.1}"))))
        }
        FieldKind::Boolean => match value {
            Value::Bool(_) => Ok(None),
            Value::String(s) if s == "true" => Ok(Some(Value::Bool(true))),
            Value::String(s) if s == "false" => Ok(Some(Value::Bool(false))),
            _ => Err("must be true or false".into()),
        },
        FieldKind::Date => match value {
            Value::String(s) if NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).is_ok() => {
                Ok(Some(Value::String(s.trim().to_string())))
            }
            _ => Err("must be a date in YYYY-MM-DD format".into()),
        },
        FieldKind::TextList => match value {
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(None),
            _ => Err("must be a list of strings".into()),
        },
    }
}

fn whole_number(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| "must be a whole number".to_string())
}
