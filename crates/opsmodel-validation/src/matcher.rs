//! Structural type matching
//!
//! Pure, stateless checks deciding whether a [`Value`] fits a
//! [`TypeDescriptor`]. Containers are inspected one level deep: every
//! element (and, for mappings, every key and value) must have exactly the
//! kind named by the parameter type. Nested parameters are not recursed.

use crate::types::{TypeDescriptor, Value};

// ============================================================================
// Public API
// ============================================================================

/// Check whether `value` structurally matches `type_desc`
///
/// A null value matches any optional descriptor. Booleans and integers are
/// disjoint, as are integers and floats.
///
/// # Example
///
/// ```
/// use opsmodel_validation::{matches, TypeDescriptor, Value};
///
/// let tags = TypeDescriptor::list(TypeDescriptor::Str);
/// assert!(matches(&Value::List(vec![Value::from("a")]), &tags));
/// assert!(!matches(&Value::List(vec![Value::from("a"), Value::Int(2)]), &tags));
/// assert!(!matches(&Value::Bool(true), &TypeDescriptor::Int));
/// ```
pub fn matches(value: &Value, type_desc: &TypeDescriptor) -> bool {
    match (type_desc, value) {
        (TypeDescriptor::Optional(_), Value::Null) => true,
        (TypeDescriptor::Optional(inner), _) => matches(value, inner),

        (TypeDescriptor::Bool, Value::Bool(_))
        | (TypeDescriptor::Int, Value::Int(_))
        | (TypeDescriptor::Str, Value::String(_))
        | (TypeDescriptor::Float, Value::Float(_)) => true,

        (TypeDescriptor::List(item), Value::List(items))
        | (TypeDescriptor::Set(item), Value::Set(items))
        | (TypeDescriptor::Tuple(item), Value::Tuple(items)) => {
            items.iter().all(|v| element_matches(v, item))
        }

        (TypeDescriptor::Mapping(key, val), Value::Mapping(pairs)) => pairs
            .iter()
            .all(|(k, v)| element_matches(k, key) && element_matches(v, val)),

        _ => false,
    }
}

/// Check a container member against a parameter type by kind only
///
/// `Optional(T)` as a parameter accepts null members and members of
/// `T`'s kind.
pub fn element_matches(value: &Value, type_desc: &TypeDescriptor) -> bool {
    if type_desc.is_optional() && value.is_null() {
        return true;
    }
    value.kind() == type_desc.kind()
}
