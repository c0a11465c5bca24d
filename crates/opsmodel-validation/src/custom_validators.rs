//! Custom field validators
//!
//! A custom validator further constrains, and may transform, a value that
//! already matched its field's declared type. Validators are registered
//! explicitly on a [`SchemaBuilder`](crate::schema::SchemaBuilder), one per
//! field. They receive the raw value and either return the accepted value
//! or a [`Rejection`] whose message is reported verbatim.
//!
//! Validators must be side-effect free and non-blocking; schemas are shared
//! across threads and validation never suspends.
//!
//! # Example
//!
//! ```rust
//! use opsmodel_validation::{FnFieldValidator, FieldValidator, Rejection, Value};
//!
//! let level = FnFieldValidator::new("log_level", |value| match value.as_str() {
//!     Some("INFO") | Some("DEBUG") => Ok(value.clone()),
//!     _ => Err(Rejection::new("value must be INFO or DEBUG")),
//! });
//!
//! assert!(level.validate(&Value::from("INFO")).is_ok());
//! assert!(level.validate(&Value::from("WRONG")).is_err());
//! ```

use crate::types::Value;
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// Rejection
// ============================================================================

/// Failure signalled by a custom validator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Rejection {
    message: String,
}

impl Rejection {
    /// Create a rejection with a descriptive message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message reported for the field
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for Rejection {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Rejection {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Result of a custom validator
pub type ValidatorResult = Result<Value, Rejection>;

// ============================================================================
// Field Validator Trait
// ============================================================================

/// Trait for field-level validators
pub trait FieldValidator: Send + Sync {
    /// Name of the field this validator applies to
    fn field_name(&self) -> &str;

    /// Validate and optionally transform the field value
    ///
    /// Only called with values that are present and type-correct.
    fn validate(&self, value: &Value) -> ValidatorResult;
}

/// Type alias for a shared field validator
pub type BoxedFieldValidator = Arc<dyn FieldValidator>;

// ============================================================================
// Function-based Validators (for ergonomic API)
// ============================================================================

/// Field validator backed by a closure
pub struct FnFieldValidator<F>
where
    F: Fn(&Value) -> ValidatorResult + Send + Sync,
{
    field_name: String,
    validate_fn: F,
}

impl<F> FnFieldValidator<F>
where
    F: Fn(&Value) -> ValidatorResult + Send + Sync,
{
    /// Create a new function-based field validator
    pub fn new(field_name: impl Into<String>, validate_fn: F) -> Self {
        Self {
            field_name: field_name.into(),
            validate_fn,
        }
    }
}

impl<F> FieldValidator for FnFieldValidator<F>
where
    F: Fn(&Value) -> ValidatorResult + Send + Sync,
{
    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn validate(&self, value: &Value) -> ValidatorResult {
        (self.validate_fn)(value)
    }
}

impl<F> std::fmt::Debug for FnFieldValidator<F>
where
    F: Fn(&Value) -> ValidatorResult + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnFieldValidator")
            .field("field_name", &self.field_name)
            .finish_non_exhaustive()
    }
}
