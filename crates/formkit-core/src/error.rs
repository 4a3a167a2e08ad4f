//! Error types for the validation engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error reported for a single field by its first failing check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    /// The failing check code (e.g., "required", "min_length", "predicate")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional parameters for message interpolation
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub params: HashMap<String, serde_json::Value>,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter to the error.
    pub fn param(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.params.insert(key.into(), v);
        }
        self
    }

    /// Interpolate parameters into the message.
    ///
    /// Replaces `{param_name}` placeholders with actual values.
    pub fn interpolate_message(&self) -> String {
        let mut result = self.message.clone();
        for (key, value) in &self.params {
            let placeholder = format!("{{{}}}", key);
            let replacement = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => value.to_string(),
            };
            result = result.replace(&placeholder, &replacement);
        }
        result
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.interpolate_message())
    }
}

impl std::error::Error for FieldError {}

/// Result of one validation pass: field name mapped to that field's error.
///
/// A field absent from the map is valid. Evaluation short-circuits on the
/// first failing check per field, so each field holds at most one error.
/// The map is recomputed in full on every validation run; [`ErrorMap::remove`]
/// and [`ErrorMap::without`] support the eager single-field clear a host
/// performs on each value change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorMap {
    /// Map of field name to the error for that field
    #[serde(flatten)]
    fields: HashMap<String, FieldError>,
}

impl ErrorMap {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Record an error for a field, replacing any previous entry.
    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.fields.insert(field.into(), error);
    }

    /// Get the error for a specific field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields.get(field)
    }

    /// Get the interpolated message for a specific field.
    pub fn message(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(FieldError::interpolate_message)
    }

    /// Whether the validated record may be submitted.
    pub fn is_valid(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check if there are any errors.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Remove a field's error in place; `None` when the field had none.
    pub fn remove(&mut self, field: &str) -> Option<FieldError> {
        self.fields.remove(field)
    }

    /// Return this map with `field`'s entry removed; no-op when absent.
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    /// Get all field names with errors.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate over `(field, error)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert to Result - Ok if no errors, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} field error(s)", self.len())
    }
}

impl std::error::Error for ErrorMap {}
