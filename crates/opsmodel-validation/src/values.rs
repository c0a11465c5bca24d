//! Validated output
//!
//! A [`ValueMap`] holds one accepted value per schema field, in declaration
//! order. Optional fields that were absent hold [`Value::Null`]. The map is
//! read-only once produced.

use crate::types::Value;

/// Successful validation output
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap {
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push((name.into(), value));
    }

    /// Accepted value of a field
    pub fn get(&self, field_name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == field_name)
            .map(|(_, v)| v)
    }

    /// Whether the field exists and holds no value
    pub fn is_absent(&self, field_name: &str) -> bool {
        matches!(self.get(field_name), Some(Value::Null))
    }

    /// Helper to extract a string field
    pub fn get_str(&self, field_name: &str) -> Option<&str> {
        self.get(field_name).and_then(Value::as_str)
    }

    /// Helper to extract an integer field
    pub fn get_int(&self, field_name: &str) -> Option<i64> {
        self.get(field_name).and_then(Value::as_int)
    }

    /// Helper to extract a float field
    pub fn get_float(&self, field_name: &str) -> Option<f64> {
        self.get(field_name).and_then(Value::as_float)
    }

    /// Helper to extract a boolean field
    pub fn get_bool(&self, field_name: &str) -> Option<bool> {
        self.get(field_name).and_then(Value::as_bool)
    }

    /// Iterate `(field, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume into ordered pairs
    pub fn into_inner(self) -> Vec<(String, Value)> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
