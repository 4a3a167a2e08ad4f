//! Individual validation checks.
//!
//! Each check tests one constraint against a single field value. A
//! [`FieldRule`](crate::FieldRule) composes them in a fixed order with the
//! first failure winning.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Non-empty (after trimming) validation check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RequiredCheck {
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RequiredCheck {
    /// Create a new required check with the default message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a required check with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Run the check against one value.
    pub fn run(&self, value: &str) -> Result<(), FieldError> {
        if !value.trim().is_empty() {
            Ok(())
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| "This field is required".to_string());
            Err(FieldError::new("required", message))
        }
    }
}

/// Minimum length check, counted in characters.
///
/// The check is a bare bound test; the skip-when-blank policy for optional
/// fields lives in [`FieldRule`](crate::FieldRule).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MinLengthCheck {
    /// Minimum length (inclusive)
    pub min: usize,
    /// Custom error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MinLengthCheck {
    /// Create a minimum length check with the default message.
    pub fn new(min: usize) -> Self {
        Self { min, message: None }
    }

    /// Set a custom error message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Run the check against one value.
    pub fn run(&self, value: &str) -> Result<(), FieldError> {
        let len = value.chars().count();

        if len >= self.min {
            Ok(())
        } else {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| format!("Must be at least {} characters", self.min));
            Err(FieldError::new("min_length", message)
                .param("min", self.min)
                .param("actual", len))
        }
    }
}

/// Shared pure predicate over a field value.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Format check driven by a pure predicate.
///
/// Predicates are closures and cannot be serialized; rule sets loaded from
/// configuration carry no predicate checks.
#[derive(Clone)]
pub struct PredicateCheck {
    check: Predicate,
    /// Message reported when the predicate fails
    pub message: String,
}

impl PredicateCheck {
    /// Create a predicate check with the default message.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            message: "Invalid value".to_string(),
        }
    }

    /// Set the message reported on failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Run the check against one value.
    pub fn run(&self, value: &str) -> Result<(), FieldError> {
        if (self.check)(value) {
            Ok(())
        } else {
            Err(FieldError::new("predicate", self.message.clone()))
        }
    }
}

impl fmt::Debug for PredicateCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateCheck")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_check_valid() {
        let check = RequiredCheck::new();
        assert!(check.run("value").is_ok());
        assert!(check.run("  value  ").is_ok());
    }

    #[test]
    fn required_check_empty() {
        let check = RequiredCheck::new();
        assert!(check.run("").is_err());
        assert!(check.run("   ").is_err());
    }

    #[test]
    fn required_check_default_message() {
        let check = RequiredCheck::new();
        let err = check.run("").unwrap_err();
        assert_eq!(err.message, "This field is required");
        assert_eq!(err.code, "required");
    }

    #[test]
    fn required_check_custom_message() {
        let check = RequiredCheck::with_message("Please fill this in");
        let err = check.run("").unwrap_err();
        assert_eq!(err.message, "Please fill this in");
    }

    #[test]
    fn min_length_check_boundary() {
        let check = MinLengthCheck::new(3);
        assert!(check.run("ab").is_err());
        assert!(check.run("abc").is_ok());
        assert!(check.run("abcd").is_ok());
    }

    #[test]
    fn min_length_check_counts_chars_not_bytes() {
        let check = MinLengthCheck::new(3);
        assert!(check.run("äöü").is_ok());
    }

    #[test]
    fn min_length_check_default_message() {
        let check = MinLengthCheck::new(5);
        let err = check.run("1234").unwrap_err();
        assert_eq!(err.message, "Must be at least 5 characters");
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn predicate_check_runs_closure() {
        let check = PredicateCheck::new(|v| v.contains('@')).with_message("Invalid email");
        assert!(check.run("jane@example.com").is_ok());

        let err = check.run("not-an-email").unwrap_err();
        assert_eq!(err.message, "Invalid email");
        assert_eq!(err.code, "predicate");
    }

    #[test]
    fn check_serialization_roundtrip() {
        let check = MinLengthCheck::new(3).with_message("Too short");
        let json = serde_json::to_string(&check).unwrap();
        let parsed: MinLengthCheck = serde_json::from_str(&json).unwrap();
        assert_eq!(check, parsed);
    }
}
