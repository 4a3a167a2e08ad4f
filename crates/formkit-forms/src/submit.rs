//! The create-operation collaborator seam.

use async_trait::async_trait;
use formkit_core::Record;
use thiserror::Error;

/// Error reported by a create-operation collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CreateError {
    /// The remote create call failed.
    #[error("create operation failed: {0}")]
    Remote(String),
}

/// External effect that persists a validated record.
///
/// Implementations perform the remote mutation (create user, create client)
/// and report failure through [`CreateError`]. The form session hands over a
/// validated record and does not depend on the outcome for its own state;
/// trust-boundary checks such as duplicate usernames belong on the remote
/// side.
///
/// ## Example
///
/// ```rust,ignore
/// use formkit_forms::prelude::*;
///
/// struct ApiClient;
///
/// #[async_trait]
/// impl CreateOperation for ApiClient {
///     async fn create(&self, record: Record) -> Result<(), CreateError> {
///         // POST the record to the user-management backend
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait CreateOperation: Send + Sync {
    /// Persist one validated record.
    async fn create(&self, record: Record) -> Result<(), CreateError>;
}
