//! The record of field values under validation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current form field values, keyed by field name.
///
/// A field absent from the record reads as the empty string. Rule sets may
/// reference fields the host never touched; those validate as blank rather
/// than erroring on a missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Set a field's value, returning the previous value if any.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field.into(), value.into())
    }

    /// Get a field's value; missing fields read as `""`.
    pub fn value(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Check whether the field has ever been set.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields that have been set.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no field has been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get all field names that have been set.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
