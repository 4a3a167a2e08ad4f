//! Field-keyed rule sets and the validation entry points.

use crate::error::ErrorMap;
use crate::record::Record;
use crate::rules::FieldRule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The declarative validation configuration for one form.
///
/// Built once via [`RuleSet::builder`], immutable at evaluation time.
/// Serializable for configuration use; predicate checks are closures and
/// do not survive a round-trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    /// Map of field name to that field's rule
    #[serde(flatten)]
    rules: HashMap<String, FieldRule>,
}

impl RuleSet {
    /// Create a builder for constructing a rule set.
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Get the rule for a specific field.
    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Get all field names covered by this rule set.
    pub fn field_names(&self) -> Vec<&str> {
        self.rules.keys().map(|s| s.as_str()).collect()
    }

    /// Number of fields covered.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule set covers no fields.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule against `record` and collect the failures.
    ///
    /// Fields referenced by the rule set but absent from the record are
    /// treated as empty. The record is not mutated, and each field's error
    /// is computed independently, so the result is order-independent. The
    /// submit gate is `result.is_valid()`.
    pub fn validate(&self, record: &Record) -> ErrorMap {
        let mut errors = ErrorMap::new();

        for (field, rule) in &self.rules {
            if let Some(error) = rule.evaluate(record.value(field)) {
                errors.insert(field.clone(), error);
            }
        }

        errors
    }
}

/// Builder for constructing a [`RuleSet`].
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: HashMap<String, FieldRule>,
}

impl RuleSetBuilder {
    /// Attach a rule to a field. A second rule for the same field replaces
    /// the first.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    /// Build the rule set.
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}

/// Validate `record` against `rules`.
///
/// Free-function form of [`RuleSet::validate`].
pub fn validate(record: &Record, rules: &RuleSet) -> ErrorMap {
    rules.validate(record)
}

/// Return `errors` with `field`'s entry removed; no-op when absent.
///
/// Hosts call this on every value change, before the next full validation
/// pass, so a stale message is not shown while the user is typing.
pub fn clear_field_error(errors: ErrorMap, field: &str) -> ErrorMap {
    errors.without(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::predicates;

    fn sample_rules() -> RuleSet {
        RuleSet::builder()
            .field("username", FieldRule::new().required().min_length(3))
            .field("email", FieldRule::new().predicate(predicates::email()))
            .build()
    }

    #[test]
    fn collects_only_failing_fields() {
        let record: Record = [("username", "jd"), ("email", "jd@example.com")]
            .into_iter()
            .collect();

        let errors = sample_rules().validate(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("username").unwrap().code, "min_length");
        assert!(!errors.is_valid());
    }

    #[test]
    fn missing_record_keys_read_as_empty() {
        let errors = sample_rules().validate(&Record::new());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("username").unwrap().code, "required");
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn valid_record_yields_empty_map() {
        let record: Record = [("username", "jdoe"), ("email", "")].into_iter().collect();

        let errors = sample_rules().validate(&record);
        assert!(errors.is_valid());
        assert!(errors.into_result().is_ok());
    }

    #[test]
    fn record_is_not_mutated() {
        let record: Record = [("username", "jd")].into_iter().collect();
        let before = record.clone();
        let _ = sample_rules().validate(&record);
        assert_eq!(record, before);
    }

    #[test]
    fn free_functions_delegate() {
        let record = Record::new();
        let rules = sample_rules();

        let errors = validate(&record, &rules);
        assert_eq!(errors.len(), 1);

        let cleared = clear_field_error(errors, "username");
        assert!(cleared.is_valid());
    }

    #[test]
    fn ruleset_serialization_keeps_field_rules() {
        let rules = sample_rules();
        let json = serde_json::to_string(&rules).unwrap();
        let parsed: RuleSet = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 2);
        assert!(parsed.rule("username").unwrap().required.is_some());
        // predicates do not survive the round-trip
        assert!(parsed.rule("email").unwrap().predicate.is_none());
    }
}
