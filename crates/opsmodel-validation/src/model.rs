//! Typed models
//!
//! A model declares its [`Schema`] once and is constructed from untyped
//! input many times. Construction validates first and only builds the typed
//! value from a fully validated [`ValueMap`].
//!
//! ```rust
//! use once_cell::sync::Lazy;
//! use opsmodel_validation::{Model, Schema, TypeDescriptor, Value, ValueMap};
//!
//! struct LogConfig {
//!     level: String,
//! }
//!
//! static LOG_SCHEMA: Lazy<Schema> = Lazy::new(|| {
//!     Schema::builder()
//!         .field("log_level", TypeDescriptor::Str)
//!         .build()
//!         .expect("log schema is well-formed")
//! });
//!
//! impl Model for LogConfig {
//!     fn schema() -> &'static Schema {
//!         &LOG_SCHEMA
//!     }
//!
//!     fn from_values(values: ValueMap) -> Self {
//!         Self {
//!             level: values.get_str("log_level").unwrap_or_default().to_string(),
//!         }
//!     }
//! }
//!
//! let config = LogConfig::construct([("log-level", Value::from("INFO"))]).unwrap();
//! assert_eq!(config.level, "INFO");
//! assert!(LogConfig::construct(Vec::<(String, Value)>::new()).is_err());
//! ```

use crate::config::ValidationConfig;
use crate::errors::ValidationResult;
use crate::schema::Schema;
use crate::types::Value;
use crate::validators::validate_with_config;
use crate::values::ValueMap;

/// A typed view over a validated input
pub trait Model: Sized {
    /// Schema shared by every instance
    fn schema() -> &'static Schema;

    /// Build the model from validated values
    ///
    /// Every schema field is present in `values` and type-correct.
    fn from_values(values: ValueMap) -> Self;

    /// Validation settings used by [`Model::construct`]
    fn config() -> ValidationConfig {
        ValidationConfig::default()
    }

    /// Validate `input` and build the model
    fn construct<I, K>(input: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        validate_with_config(Self::schema(), input, &Self::config()).map(Self::from_values)
    }
}
