//! Conformance pass applied to structured completions before typed
//! deserialization. The extraction instruction tells the completion engine to
//! mark missing properties with an explicit null; this pass accepts that
//! marker as "absent" for optional fields and rejects it for required ones.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::descriptor::{FieldKind, FieldSpec};

#[derive(Debug, thiserror::Error)]
pub enum SchemaViolation {
    #[error("completion is not valid JSON: {0}")]
    MalformedJson(String),
    #[error("completion is not a JSON object")]
    NotAnObject,
    #[error("required field `{field}` is missing")]
    MissingRequired { field: String },
    #[error("field `{field}` is not a {expected}")]
    WrongType { field: String, expected: &'static str },
    #[error("field `{field}` must be between 0 and 1, got {value}")]
    OutOfRange { field: String, value: f64 },
    #[error("field `{field}` must be a 3-letter currency code, got `{value}`")]
    InvalidCurrency { field: String, value: String },
    #[error("field `{field}` has unrecognized value `{value}`")]
    UnknownVariant { field: String, value: String },
    #[error("field `{field}` is not a valid date: `{value}`")]
    InvalidDate { field: String, value: String },
    #[error("mapping field `{field}` refers to a header not present in the file: `{header}`")]
    UnknownHeader { field: String, header: String },
    #[error("record does not deserialize: {0}")]
    Deserialize(String),
}

/// Parses a completion into JSON, tolerating the markdown code fences the
/// engine sometimes wraps around its output.
pub fn parse_completion(completion: &str) -> Result<Value, SchemaViolation> {
    let trimmed = completion.trim();
    let body = if let Some(rest) = trimmed.strip_prefix("```") {
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        rest.strip_suffix("```").unwrap_or(rest)
    } else {
        trimmed
    };
    serde_json::from_str(body.trim()).map_err(|e| SchemaViolation::MalformedJson(e.to_string()))
}

/// Normalizes and validates a completion object in place: null markers become
/// absent for optional fields and violations for required ones; present
/// values are checked against their declared kind, with dates rewritten to
/// ISO form and currency codes uppercased.
pub fn conform(fields: &[FieldSpec], value: &mut Value) -> Result<(), SchemaViolation> {
    let object = value.as_object_mut().ok_or(SchemaViolation::NotAnObject)?;
    conform_object(fields, object, "")
}

fn conform_object(
    fields: &[FieldSpec],
    object: &mut Map<String, Value>,
    prefix: &str,
) -> Result<(), SchemaViolation> {
    for spec in fields {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{prefix}.{}", spec.name)
        };

        let absent = match object.get(spec.name) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => is_null_marker(s),
            Some(_) => false,
        };

        if absent {
            if spec.required {
                return Err(SchemaViolation::MissingRequired { field: path });
            }
            object.insert(spec.name.to_string(), Value::Null);
            continue;
        }

        let value = object
            .get_mut(spec.name)
            .expect("field checked present above");
        conform_value(spec, value, &path)?;
    }
    Ok(())
}

fn conform_value(spec: &FieldSpec, value: &mut Value, path: &str) -> Result<(), SchemaViolation> {
    match spec.kind {
        FieldKind::Text => {
            require_str(value, path, "string")?;
        }
        FieldKind::Number => {
            require_f64(value, path, "number")?;
        }
        FieldKind::Integer => {
            if value.as_u64().is_none() {
                return Err(wrong_type(path, "non-negative integer"));
            }
        }
        FieldKind::Boolean => {
            if value.as_bool().is_none() {
                return Err(wrong_type(path, "boolean"));
            }
        }
        FieldKind::Fraction => {
            let number = require_f64(value, path, "number")?;
            if !(0.0..=1.0).contains(&number) {
                return Err(SchemaViolation::OutOfRange {
                    field: path.to_string(),
                    value: number,
                });
            }
        }
        FieldKind::CurrencyCode => {
            let code = require_str(value, path, "string")?.to_string();
            if code.chars().count() != 3 {
                return Err(SchemaViolation::InvalidCurrency {
                    field: path.to_string(),
                    value: code,
                });
            }
            *value = Value::String(code.to_uppercase());
        }
        FieldKind::Date => {
            let raw = require_str(value, path, "string")?.to_string();
            let date = parse_date(&raw).ok_or_else(|| SchemaViolation::InvalidDate {
                field: path.to_string(),
                value: raw.clone(),
            })?;
            *value = Value::String(date.format("%Y-%m-%d").to_string());
        }
        FieldKind::TextList => {
            let items = value
                .as_array()
                .ok_or_else(|| wrong_type(path, "list of strings"))?;
            if items.iter().any(|item| !item.is_string()) {
                return Err(wrong_type(path, "list of strings"));
            }
        }
        FieldKind::Enum(variants) => {
            let candidate = require_str(value, path, "string")?;
            if !variants.contains(&candidate) {
                return Err(SchemaViolation::UnknownVariant {
                    field: path.to_string(),
                    value: candidate.to_string(),
                });
            }
        }
        FieldKind::Object(nested) => {
            let object = value.as_object_mut().ok_or_else(|| wrong_type(path, "object"))?;
            conform_object(nested, object, path)?;
        }
    }
    Ok(())
}

fn require_str<'a>(
    value: &'a Value,
    path: &str,
    expected: &'static str,
) -> Result<&'a str, SchemaViolation> {
    value.as_str().ok_or_else(|| wrong_type(path, expected))
}

fn require_f64(value: &Value, path: &str, expected: &'static str) -> Result<f64, SchemaViolation> {
    value.as_f64().ok_or_else(|| wrong_type(path, expected))
}

fn wrong_type(path: &str, expected: &'static str) -> SchemaViolation {
    SchemaViolation::WrongType {
        field: path.to_string(),
        expected,
    }
}

fn is_null_marker(s: &str) -> bool {
    s.is_empty() || s.eq_ignore_ascii_case("null") || s.eq_ignore_ascii_case("n/a")
}

/// Accepts ISO dates, RFC 3339 timestamps, and the dotted day-first form
/// common in European fund documents.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%d.%m.%Y").ok())
}
