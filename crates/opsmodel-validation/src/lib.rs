//! Opsmodel Validation
//!
//! Declarative validation of untyped configuration and relation data.
//!
//! A [`Schema`] names a set of fields with declared types, some optional,
//! some governed by a custom validator. [`validate`] checks an input
//! mapping against it and returns either a [`ValueMap`] with one accepted
//! value per field, or a [`ValidationError`] listing every missing or
//! invalid field at once.
//!
//! # Features
//!
//! - **Default**: schemas, type matching, model validation, typed models
//! - **serde**: conversion to and from `serde_json::Value`
//!
//! # Example
//!
//! ```rust
//! use opsmodel_validation::{validate, ErrorType, Schema, TypeDescriptor, Value};
//!
//! let schema = Schema::builder()
//!     .field("count", TypeDescriptor::Int)
//!     .field("tags", TypeDescriptor::list(TypeDescriptor::Str))
//!     .build()
//!     .unwrap();
//!
//! let err = validate(
//!     &schema,
//!     [
//!         ("count", Value::from("5")),
//!         ("tags", Value::List(vec![Value::from("a"), Value::Int(2)])),
//!     ],
//! )
//! .unwrap_err();
//!
//! assert_eq!(err.get("count").unwrap().error_type, ErrorType::InvalidType);
//! assert_eq!(err.get("tags").unwrap().error_type, ErrorType::InvalidType);
//! ```

// Public modules
pub mod config;
pub mod custom_validators;
pub mod errors;
pub mod matcher;
pub mod model;
pub mod mysql;
pub mod schema;
pub mod types;
pub mod validators;
pub mod values;

// JSON interop (feature-gated)
#[cfg(feature = "serde")]
pub mod json;

// Re-export commonly used types
pub use config::{ExtraFields, ValidationConfig};
pub use custom_validators::{
    BoxedFieldValidator, FieldValidator, FnFieldValidator, Rejection, ValidatorResult,
};
pub use errors::{ErrorType, FieldError, SchemaError, ValidationError, ValidationResult};
pub use matcher::{element_matches, matches};
pub use model::Model;
pub use mysql::{MysqlModel, MysqlUri};
pub use schema::{FieldDescriptor, Schema, SchemaBuilder};
pub use types::{TypeDescriptor, Value, ValueKind};
pub use validators::{normalize_key, validate, validate_with_config};
pub use values::ValueMap;

#[cfg(feature = "serde")]
pub use json::{input_from_json, JsonInputError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
