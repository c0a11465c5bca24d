//! Validation error types
//!
//! This module defines error types for validation failures and for
//! malformed schema definitions.

use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Validation Result
// ============================================================================

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

// ============================================================================
// Error Type Classification
// ============================================================================

/// Classification of field errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorType {
    /// Required field absent or null
    Missing,

    /// Value structurally incompatible with the declared type
    InvalidType,

    /// Input key that names no schema field (only with `ExtraFields::Forbid`)
    Undefined,

    /// Custom validator rejected the value
    CustomRejected,
}

impl ErrorType {
    /// Default message for the built-in reasons
    pub fn default_message(self) -> &'static str {
        match self {
            Self::Missing => "Missing attribute",
            Self::InvalidType => "Invalid type",
            Self::Undefined => "Undefined attribute",
            Self::CustomRejected => "Rejected by custom validator",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::InvalidType => write!(f, "invalid_type"),
            Self::Undefined => write!(f, "undefined"),
            Self::CustomRejected => write!(f, "custom_rejected"),
        }
    }
}

// ============================================================================
// Single Field Error
// ============================================================================

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    /// Field name (after key normalization)
    pub field: String,

    /// Human-readable reason
    pub message: String,

    /// Error type classification
    pub error_type: ErrorType,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>, error_type: ErrorType) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            error_type,
        }
    }

    /// Create a missing field error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, ErrorType::Missing.default_message(), ErrorType::Missing)
    }

    /// Create a type error
    pub fn invalid_type(field: impl Into<String>) -> Self {
        Self::new(
            field,
            ErrorType::InvalidType.default_message(),
            ErrorType::InvalidType,
        )
    }

    /// Create an undefined attribute error
    pub fn undefined(field: impl Into<String>) -> Self {
        Self::new(
            field,
            ErrorType::Undefined.default_message(),
            ErrorType::Undefined,
        )
    }

    /// Create a custom rejection carrying the validator's message verbatim
    pub fn rejected(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, ErrorType::CustomRejected)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n    {}\n", self.field, self.message)
    }
}

// ============================================================================
// Aggregated Validation Error
// ============================================================================

/// Every problem found while validating one input
///
/// Entries are in field declaration order, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Build from collected entries; `None` when there is nothing to report
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// Entries as a slice
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume into the entries
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// Number of offending fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the offending fields, in report order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// Reason recorded for a field
    pub fn reason(&self, field: &str) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Entry recorded for a field
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// One-line summary naming every offending field
    pub fn message(&self) -> String {
        let mut seen = HashSet::new();
        let names: Vec<&str> = self.fields().filter(|f| seen.insert(*f)).collect();
        format!("Errors found in: {}", names.join(", "))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} validation errors.", self.errors.len())?;
        for error in &self.errors {
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Schema Definition Errors
// ============================================================================

/// Programming errors detected while building a schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("validator registered for undeclared field '{0}'")]
    UnknownField(String),

    #[error("field '{0}' already has a custom validator")]
    DuplicateValidator(String),
}
