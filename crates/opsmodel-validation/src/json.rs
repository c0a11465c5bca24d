//! JSON interop (feature `serde`)
//!
//! Converts parsed JSON into validator input and validated output back to
//! JSON. JSON has no set or tuple, so arrays always become [`Value::List`];
//! sets and tuples are written out as arrays.

use crate::types::Value;
use crate::values::ValueMap;
use thiserror::Error;

/// JSON document that cannot be used as validation input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonInputError {
    #[error("expected a JSON object as validation input, got {0}")]
    NotAnObject(&'static str),

    #[error("integer in '{0}' does not fit in a signed 64-bit value")]
    IntegerOutOfRange(String),
}

/// Turn a JSON object into `(key, value)` input pairs
///
/// Integers above `i64::MAX` are rejected rather than widened to a float.
pub fn input_from_json(document: serde_json::Value) -> Result<Vec<(String, Value)>, JsonInputError> {
    match document {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(k, v)| {
                if has_wide_integer(&v) {
                    Err(JsonInputError::IntegerOutOfRange(k))
                } else {
                    Ok((k, Value::from(v)))
                }
            })
            .collect(),
        other => Err(JsonInputError::NotAnObject(json_type_name(&other))),
    }
}

fn has_wide_integer(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Number(n) => n.is_u64() && n.as_i64().is_none(),
        serde_json::Value::Array(items) => items.iter().any(has_wide_integer),
        serde_json::Value::Object(map) => map.values().any(has_wide_integer),
        _ => false,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Lossy for integers above `i64::MAX`, which become [`Value::Float`];
/// [`input_from_json`] rejects those instead.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Value::String(k), v.into()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Int(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::List(items) | Value::Set(items) | Value::Tuple(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Mapping(pairs) => serde_json::Value::Object(
                pairs
                    .into_iter()
                    .map(|(k, v)| (json_key(k), v.into()))
                    .collect(),
            ),
        }
    }
}

// JSON object keys are strings; other scalars are rendered as text
fn json_key(key: Value) -> String {
    match key {
        Value::String(s) => s,
        other => serde_json::Value::from(other).to_string(),
    }
}

impl ValueMap {
    /// Render the validated values as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.clone().into()))
                .collect(),
        )
    }
}
