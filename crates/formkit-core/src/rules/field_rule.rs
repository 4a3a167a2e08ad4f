//! The declarative per-field rule.

use super::checks::{MinLengthCheck, PredicateCheck, RequiredCheck};
use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// The validation rule attached to one field.
///
/// Any of the three checks may be present; evaluation runs them in a fixed
/// order with the first failure winning: required, then min_length, then
/// predicate. min_length and the predicate are skipped for empty values, so
/// a blank optional field never errors.
///
/// `required` trims before testing emptiness; the skip test for the other
/// two checks is exact, so a whitespace-only value on an optional field
/// still reaches min_length.
///
/// ## Example
///
/// ```rust,ignore
/// use formkit_core::prelude::*;
///
/// let rule = FieldRule::new().required().min_length(3);
/// assert_eq!(rule.evaluate("").unwrap().code, "required");
/// assert_eq!(rule.evaluate("ab").unwrap().code, "min_length");
/// assert!(rule.evaluate("abc").is_none());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldRule {
    /// Non-empty check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<RequiredCheck>,
    /// Minimum length check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<MinLengthCheck>,
    /// Format predicate (not serializable; absent in deserialized rule sets)
    #[serde(skip)]
    pub predicate: Option<PredicateCheck>,
}

impl FieldRule {
    /// Create a rule with no checks; every value passes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the field required.
    pub fn required(mut self) -> Self {
        self.required = Some(RequiredCheck::new());
        self
    }

    /// Mark the field required with a custom message.
    pub fn required_with_message(mut self, message: impl Into<String>) -> Self {
        self.required = Some(RequiredCheck::with_message(message));
        self
    }

    /// Require at least `min` characters for non-empty values.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(MinLengthCheck::new(min));
        self
    }

    /// Require at least `min` characters, with a custom message.
    pub fn min_length_with_message(mut self, min: usize, message: impl Into<String>) -> Self {
        self.min_length = Some(MinLengthCheck::new(min).with_message(message));
        self
    }

    /// Attach a format predicate, run only on non-empty values.
    pub fn predicate(mut self, check: PredicateCheck) -> Self {
        self.predicate = Some(check);
        self
    }

    /// Evaluate the rule against one value.
    ///
    /// `None` means the field is valid. Pure and deterministic: no side
    /// effects, same input always produces the same result.
    pub fn evaluate(&self, value: &str) -> Option<FieldError> {
        if let Some(required) = &self.required {
            if let Err(error) = required.run(value) {
                return Some(error);
            }
        }

        // Blank optional fields are fine; remaining checks only see content.
        if value.is_empty() {
            return None;
        }

        if let Some(min_length) = &self.min_length {
            if let Err(error) = min_length.run(value) {
                return Some(error);
            }
        }

        if let Some(predicate) = &self.predicate {
            if let Err(error) = predicate.run(value) {
                return Some(error);
            }
        }

        None
    }
}
