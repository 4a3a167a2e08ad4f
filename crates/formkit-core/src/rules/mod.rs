//! Validation rules: individual checks and their per-field composition.

mod checks;
mod field_rule;
pub mod predicates;

pub use checks::{MinLengthCheck, Predicate, PredicateCheck, RequiredCheck};
pub use field_rule::FieldRule;
