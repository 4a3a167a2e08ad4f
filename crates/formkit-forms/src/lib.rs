//! # FormKit Forms
//!
//! Form session layer on top of the FormKit validation engine: the
//! edit/validate/submit state machine one dialog owns, the async seam to the
//! create-operation collaborator, and the stock rule sets for the
//! user-management create dialogs.
//!
//! ## Example
//!
//! ```rust,ignore
//! use formkit_forms::prelude::*;
//!
//! let mut session = FormSession::new(users::client_rules());
//!
//! session.set("firstName", "Jane");
//! session.set("lastName", "Doe");
//! session.set("username", "jdoe");
//! session.set("phone", "12345");
//!
//! match session.submit() {
//!     SubmitAttempt::Accepted(record) => { /* hand off to the API client */ }
//!     SubmitAttempt::Rejected(errors) => { /* render errors next to fields */ }
//! }
//! ```

mod session;
mod submit;
pub mod users;

pub use session::{FormSession, SessionState, SubmitAttempt};
pub use submit::{CreateError, CreateOperation};

/// Prelude module for the form session layer
pub mod prelude {
    pub use crate::session::{FormSession, SessionState, SubmitAttempt};
    pub use crate::submit::{CreateError, CreateOperation};
    pub use crate::users;
    pub use async_trait::async_trait;
    pub use formkit_core::prelude::*;
}
