//! Schema definitions
//!
//! A [`Schema`] is an ordered, immutable set of [`FieldDescriptor`]s built
//! once per model shape with [`SchemaBuilder`] and reused for every
//! validation call. Cloning a schema is cheap and it can be shared across
//! threads without locking.

use crate::custom_validators::{BoxedFieldValidator, FieldValidator, FnFieldValidator, ValidatorResult};
use crate::errors::SchemaError;
use crate::types::{TypeDescriptor, Value};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// Field Descriptor
// ============================================================================

/// Declaration of one schema field
#[derive(Clone)]
pub struct FieldDescriptor {
    /// Field name (case-sensitive, underscores rather than hyphens)
    pub name: String,
    /// Declared type; an `Optional` wrapper makes the field optional
    pub type_desc: TypeDescriptor,
    validator: Option<BoxedFieldValidator>,
}

impl FieldDescriptor {
    /// Create a new field descriptor
    pub fn new(name: impl Into<String>, type_desc: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_desc,
            validator: None,
        }
    }

    /// Whether the field may be absent
    pub fn is_optional(&self) -> bool {
        self.type_desc.is_optional()
    }

    /// Custom validator registered for this field
    pub fn validator(&self) -> Option<&BoxedFieldValidator> {
        self.validator.as_ref()
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("type_desc", &self.type_desc)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Ordered set of uniquely named fields
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Arc<[FieldDescriptor]>,
}

impl Schema {
    /// Start building a schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether a field with this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Schema Builder
// ============================================================================

/// Builder for [`Schema`]
///
/// ```rust
/// use opsmodel_validation::{Rejection, Schema, TypeDescriptor};
///
/// let schema = Schema::builder()
///     .field("count", TypeDescriptor::Int)
///     .field("tags", TypeDescriptor::optional(TypeDescriptor::list(TypeDescriptor::Str)))
///     .validator("count", |v| match v.as_int() {
///         Some(n) if n >= 0 => Ok(v.clone()),
///         _ => Err(Rejection::new("count must be non-negative")),
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDescriptor>,
    validators: Vec<BoxedFieldValidator>,
}

impl SchemaBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field
    pub fn field(self, name: impl Into<String>, type_desc: TypeDescriptor) -> Self {
        self.descriptor(FieldDescriptor::new(name, type_desc))
    }

    /// Declare a field from a prepared descriptor
    pub fn descriptor(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Register a closure as the custom validator for `field`
    pub fn validator<F>(self, field: impl Into<String>, validate_fn: F) -> Self
    where
        F: Fn(&Value) -> ValidatorResult + Send + Sync + 'static,
    {
        self.add_validator(FnFieldValidator::new(field, validate_fn))
    }

    /// Register a custom validator; the target field is its `field_name()`
    pub fn add_validator(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    /// Finish the schema
    ///
    /// Fails on duplicate field names, on validators for undeclared fields
    /// and on a second validator for the same field.
    pub fn build(self) -> Result<Schema, SchemaError> {
        let Self {
            mut fields,
            validators,
        } = self;

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }

        for validator in validators {
            let name = validator.field_name().to_string();
            let field = fields
                .iter_mut()
                .find(|f| f.name == name)
                .ok_or_else(|| SchemaError::UnknownField(name.clone()))?;
            if field.validator.is_some() {
                return Err(SchemaError::DuplicateValidator(name));
            }
            field.validator = Some(validator);
        }

        debug!("Schema built with {} fields", fields.len());
        Ok(Schema {
            fields: fields.into(),
        })
    }
}

impl fmt::Debug for SchemaBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaBuilder")
            .field("fields", &self.fields)
            .field("validators_count", &self.validators.len())
            .finish()
    }
}
