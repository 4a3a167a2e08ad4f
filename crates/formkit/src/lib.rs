//! # FormKit
//!
//! Declarative form validation for user-management front-ends.
//!
//! A form declares a rule set once; the engine evaluates it against the
//! current field values and produces a field/error map the UI renders next
//! to each input. The session layer owns the edit/validate/submit lifecycle
//! and hands validated records to a create-operation collaborator.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use formkit::prelude::*;
//!
//! let rules = RuleSet::builder()
//!     .field("username", FieldRule::new().required().min_length(3))
//!     .field("email", FieldRule::new().predicate(predicates::email()))
//!     .build();
//!
//! let mut session = FormSession::new(rules);
//! session.set("username", "jd");
//!
//! match session.submit() {
//!     SubmitAttempt::Rejected(errors) => {
//!         assert_eq!(
//!             errors.message("username").as_deref(),
//!             Some("Must be at least 3 characters"),
//!         );
//!     }
//!     SubmitAttempt::Accepted(record) => { /* dispatch to the backend */ }
//! }
//! ```
//!
//! ## Features
//!
//! - **Declarative**: one rules table per form, no per-field wiring
//! - **Pure engine**: validation is a function from record to error map
//! - **First failure wins**: required beats min_length beats predicate
//! - **Blank optional fields pass**: format checks only see content
//! - **Eager error clearing**: a keystroke clears that field's stale message

// Re-export the validation engine
pub use formkit_core::*;

// Re-export the form session layer
pub use formkit_forms::{users, CreateError, CreateOperation, FormSession, SessionState, SubmitAttempt};

/// Prelude: the engine and session types a form host needs.
pub mod prelude {
    pub use formkit_core::prelude::*;
    pub use formkit_forms::prelude::*;
}
