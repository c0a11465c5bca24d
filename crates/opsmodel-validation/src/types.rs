//! Core type system for validation
//!
//! This module defines the runtime values handed to the validator and the
//! type descriptors that schema fields are declared with.

use std::fmt;

// ============================================================================
// Value Enum - Runtime values to be validated
// ============================================================================

/// Runtime value that can be validated
///
/// `Bool` and `Int` are separate variants: a boolean never satisfies an
/// integer field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null value (treated the same as an absent key)
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (i64)
    Int(i64),
    /// Float value (f64)
    Float(f64),
    /// String value
    String(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Set of values (uniqueness is the producer's concern)
    Set(Vec<Value>),
    /// Tuple of values
    Tuple(Vec<Value>),
    /// Key/value pairs; keys may be any value
    Mapping(Vec<(Value, Value)>),
}

impl Value {
    /// Runtime kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::String(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Set(_) => ValueKind::Set,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Mapping(_) => ValueKind::Mapping,
        }
    }

    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float payload, if any. Integers are not widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Look up a string key in a `Mapping` value
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Mapping(pairs) => pairs
                .iter()
                .find(|(k, _)| k.as_str() == Some(key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// ValueKind - Exact runtime type identity
// ============================================================================

/// Runtime kind of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Float,
    Str,
    List,
    Set,
    Tuple,
    Mapping,
}

impl ValueKind {
    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Float => "float",
            Self::Str => "string",
            Self::List => "list",
            Self::Set => "set",
            Self::Tuple => "tuple",
            Self::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TypeDescriptor - Type definitions for validation
// ============================================================================

/// Type descriptor for a schema field
///
/// Containers carry one level of parameterization. Element types are
/// compared by kind only, so `List(List(Int))` accepts any list of lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    // ========================================================================
    // Primitive Types
    // ========================================================================
    /// Boolean type
    Bool,

    /// Integer type (booleans are rejected)
    Int,

    /// String type
    Str,

    /// Float type (integers are rejected)
    Float,

    // ========================================================================
    // Collection Types
    // ========================================================================
    /// List whose elements are all of the given type
    List(Box<TypeDescriptor>),

    /// Set whose elements are all of the given type
    Set(Box<TypeDescriptor>),

    /// Tuple whose elements are all of the given type
    Tuple(Box<TypeDescriptor>),

    /// Mapping with uniformly typed keys and values
    Mapping(Box<TypeDescriptor>, Box<TypeDescriptor>),

    // ========================================================================
    // Special Types
    // ========================================================================
    /// Optional wrapper; null or absent always matches
    Optional(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// `List(item)`
    pub fn list(item: TypeDescriptor) -> Self {
        Self::List(Box::new(item))
    }

    /// `Set(item)`
    pub fn set(item: TypeDescriptor) -> Self {
        Self::Set(Box::new(item))
    }

    /// `Tuple(item)`
    pub fn tuple(item: TypeDescriptor) -> Self {
        Self::Tuple(Box::new(item))
    }

    /// `Mapping(key, value)`
    pub fn mapping(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        Self::Mapping(Box::new(key), Box::new(value))
    }

    /// `Optional(inner)`
    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Whether this is the optional wrapper
    pub fn is_optional(&self) -> bool {
        matches!(self, Self::Optional(_))
    }

    /// Strip every optional wrapper
    pub fn unwrap_optional(&self) -> &TypeDescriptor {
        match self {
            Self::Optional(inner) => inner.unwrap_optional(),
            other => other,
        }
    }

    /// Value kind this descriptor expects (optional wrappers stripped)
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Optional(inner) => inner.kind(),
            Self::Bool => ValueKind::Bool,
            Self::Int => ValueKind::Int,
            Self::Str => ValueKind::Str,
            Self::Float => ValueKind::Float,
            Self::List(_) => ValueKind::List,
            Self::Set(_) => ValueKind::Set,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Mapping(..) => ValueKind::Mapping,
        }
    }

    /// Get human-readable type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Optional(_) => "optional",
            other => other.kind().name(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Str => write!(f, "str"),
            Self::Float => write!(f, "float"),
            Self::List(item) => write!(f, "list[{item}]"),
            Self::Set(item) => write!(f, "set[{item}]"),
            Self::Tuple(item) => write!(f, "tuple[{item}]"),
            Self::Mapping(key, value) => write!(f, "mapping[{key}, {value}]"),
            Self::Optional(inner) => write!(f, "optional[{inner}]"),
        }
    }
}
