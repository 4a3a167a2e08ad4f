//! # FormKit Core
//!
//! Declarative form validation engine. A rule set keyed by field name is
//! evaluated against a record of field values and produces a field/error
//! map; an empty map means the record may be submitted.
//!
//! ## Example
//!
//! ```rust,ignore
//! use formkit_core::prelude::*;
//!
//! let rules = RuleSet::builder()
//!     .field("username", FieldRule::new().required().min_length(3))
//!     .field("email", FieldRule::new().predicate(predicates::email()))
//!     .build();
//!
//! let record: Record = [("username", "jd"), ("email", "")].into_iter().collect();
//!
//! let errors = rules.validate(&record);
//! assert!(!errors.is_valid());
//! assert_eq!(errors.message("username").as_deref(), Some("Must be at least 3 characters"));
//! ```
//!
//! ## Checks
//!
//! - `required` - value must be non-empty after trimming
//! - `min_length` - character count of a non-empty value must reach the bound
//! - `predicate` - pure format check, run only on non-empty values
//!
//! Per field, checks run in that order and the first failure wins; a blank
//! value on an optional field passes every check.
//!
//! ## Error Format
//!
//! Error maps serialize to JSON keyed by field:
//!
//! ```json
//! {
//!   "username": {"code": "min_length", "message": "Must be at least 3 characters"},
//!   "email": {"code": "predicate", "message": "Invalid email"}
//! }
//! ```

mod error;
mod record;
mod rules;
mod ruleset;


pub use error::{ErrorMap, FieldError};
pub use record::Record;
pub use rules::{predicates, FieldRule, MinLengthCheck, Predicate, PredicateCheck, RequiredCheck};
pub use ruleset::{clear_field_error, validate, RuleSet, RuleSetBuilder};

/// Prelude module for the validation engine
pub mod prelude {
    pub use crate::error::{ErrorMap, FieldError};
    pub use crate::record::Record;
    pub use crate::rules::{
        predicates, FieldRule, MinLengthCheck, Predicate, PredicateCheck, RequiredCheck,
    };
    pub use crate::ruleset::{clear_field_error, validate, RuleSet, RuleSetBuilder};
}
