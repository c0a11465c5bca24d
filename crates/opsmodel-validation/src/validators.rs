//! Model validation engine
//!
//! Validates an untyped input mapping against a [`Schema`]. Every field is
//! checked and every problem is collected before anything is reported, so
//! callers see all offending fields in one pass.
//!
//! Per field the pipeline is strict:
//!
//! 1. presence: a missing or null value fails with `MISSING` unless the
//!    field is optional, in which case it is accepted as null
//! 2. type: the value must match the declared type, else `INVALID_TYPE`
//! 3. custom validator: may reject with its own message or transform the
//!    value
//!
//! A later stage only runs when every earlier stage passed.

use crate::config::{ExtraFields, ValidationConfig};
use crate::errors::{FieldError, ValidationError, ValidationResult};
use crate::matcher::matches;
use crate::schema::{FieldDescriptor, Schema};
use crate::types::Value;
use crate::values::ValueMap;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::{debug, trace};

// ============================================================================
// Public API
// ============================================================================

/// Validate `input` against `schema` with the default configuration
///
/// # Example
///
/// ```
/// use opsmodel_validation::{validate, Schema, TypeDescriptor, Value};
///
/// let schema = Schema::builder()
///     .field("mysql_uri", TypeDescriptor::Str)
///     .field("debug", TypeDescriptor::optional(TypeDescriptor::Bool))
///     .build()
///     .unwrap();
///
/// let values = validate(&schema, [("mysql-uri", Value::from("mysql://h"))]).unwrap();
/// assert_eq!(values.get_str("mysql_uri"), Some("mysql://h"));
/// assert!(values.is_absent("debug"));
///
/// let err = validate(&schema, [("debug", Value::Int(1))]).unwrap_err();
/// assert_eq!(err.message(), "Errors found in: mysql_uri, debug");
/// ```
pub fn validate<I, K>(schema: &Schema, input: I) -> ValidationResult<ValueMap>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    validate_with_config(schema, input, &ValidationConfig::default())
}

/// Validate `input` against `schema` with an explicit configuration
pub fn validate_with_config<I, K>(
    schema: &Schema,
    input: I,
    config: &ValidationConfig,
) -> ValidationResult<ValueMap>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut data = normalize_input(input, config);
    let mut values = ValueMap::with_capacity(schema.len());
    let mut errors = Vec::new();

    for field in schema.fields() {
        let raw = data.remove(&field.name).unwrap_or(Value::Null);
        match validate_field(field, raw) {
            Ok(value) => {
                trace!("Field '{}' accepted", field.name);
                values.push(field.name.as_str(), value);
            }
            Err(error) => {
                trace!("Field '{}' rejected: {}", field.name, error.message);
                errors.push(error);
            }
        }
    }

    if config.extra == ExtraFields::Forbid && !data.is_empty() {
        let mut extra: Vec<String> = data.into_keys().collect();
        extra.sort();
        errors.extend(extra.into_iter().map(FieldError::undefined));
    }

    match ValidationError::from_errors(errors) {
        Some(error) => {
            debug!("Validation failed: {}", error.message());
            Err(error)
        }
        None => Ok(values),
    }
}

/// Rewrite hyphens in an input key to underscores
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    if key.contains('-') {
        Cow::Owned(key.replace('-', "_"))
    } else {
        Cow::Borrowed(key)
    }
}

// ============================================================================
// Per-field Pipeline
// ============================================================================

fn validate_field(field: &FieldDescriptor, raw: Value) -> Result<Value, FieldError> {
    if raw.is_null() {
        return if field.is_optional() {
            Ok(Value::Null)
        } else {
            Err(FieldError::missing(field.name.as_str()))
        };
    }

    if !matches(&raw, field.type_desc.unwrap_optional()) {
        return Err(FieldError::invalid_type(field.name.as_str()));
    }

    match field.validator() {
        Some(validator) => validator
            .validate(&raw)
            .map_err(|rejection| FieldError::rejected(field.name.as_str(), rejection.message())),
        None => Ok(raw),
    }
}

fn normalize_input<I, K>(input: I, config: &ValidationConfig) -> HashMap<String, Value>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut data = HashMap::new();
    for (key, value) in input {
        let key: String = key.into();
        let key = if config.normalize_keys && key.contains('-') {
            normalize_key(&key).into_owned()
        } else {
            key
        };
        // later keys overwrite earlier ones that normalize to the same name
        data.insert(key, value);
    }
    data
}
