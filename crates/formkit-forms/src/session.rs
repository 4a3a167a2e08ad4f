//! The per-form editing session.

use crate::submit::{CreateError, CreateOperation};
use formkit_core::{ErrorMap, Record, RuleSet};

/// Observable session state.
///
/// The full lifecycle is `Pristine -> Editing -> Validated{valid|invalid} ->
/// Submitted | Editing`. `Validated` and `Submitted` are transient within
/// [`FormSession::submit`]: an invalid pass returns the session to `Editing`
/// with the error map populated, and a valid pass hands the record off and
/// resets to `Pristine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No edits since creation, the last reset, or the last accepted submit
    Pristine,
    /// At least one field has changed
    Editing,
}

/// Result of one submit attempt.
#[derive(Debug, PartialEq)]
pub enum SubmitAttempt {
    /// The record passed validation and was taken out of the session.
    Accepted(Record),
    /// Validation failed; the session keeps the record for further edits.
    Rejected(ErrorMap),
}

/// One form's editing session: record, rule set, and current error map.
///
/// The session serializes the `change -> clear error -> validate -> submit`
/// steps for a single user; the engine underneath is pure, so independent
/// sessions never interfere.
#[derive(Debug, Clone)]
pub struct FormSession {
    rules: RuleSet,
    record: Record,
    errors: ErrorMap,
    state: SessionState,
}

impl FormSession {
    /// Create a pristine session for a rule set.
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            record: Record::new(),
            errors: ErrorMap::new(),
            state: SessionState::Pristine,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The record as edited so far.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Errors from the last validation pass, minus eagerly cleared fields.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// A field's current value; never-edited fields read as `""`.
    pub fn value(&self, field: &str) -> &str {
        self.record.value(field)
    }

    /// A field's current error message, interpolated for display.
    pub fn error(&self, field: &str) -> Option<String> {
        self.errors.message(field)
    }

    /// Record a field edit.
    ///
    /// Clears that field's error eagerly, before the next full validation
    /// pass, so a stale message is not shown while the user is typing.
    /// Other fields' errors are left untouched.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        self.record.set(field.clone(), value);
        self.errors.remove(&field);

        if self.state == SessionState::Pristine {
            tracing::debug!(field = %field, "first edit, session now editing");
            self.state = SessionState::Editing;
        }
    }

    /// Validate the record and, when valid, take it out of the session.
    ///
    /// Invalid: the error map is replaced with the fresh result and the
    /// session stays editable. Valid: the record is handed to the caller
    /// and the session resets to pristine, matching host dialogs that clear
    /// their inputs on submit.
    pub fn submit(&mut self) -> SubmitAttempt {
        let errors = self.rules.validate(&self.record);

        if errors.is_valid() {
            tracing::debug!(fields = self.record.len(), "record valid, handing off");
            let record = std::mem::take(&mut self.record);
            self.errors = ErrorMap::new();
            self.state = SessionState::Pristine;
            SubmitAttempt::Accepted(record)
        } else {
            tracing::debug!(errors = errors.len(), "submit rejected");
            self.errors = errors.clone();
            self.state = SessionState::Editing;
            SubmitAttempt::Rejected(errors)
        }
    }

    /// Submit and dispatch a valid record to a create-operation collaborator.
    ///
    /// Returns `Ok(true)` when a record was dispatched, `Ok(false)` when
    /// validation rejected the attempt, and the collaborator's error when
    /// the dispatch itself failed. The session resets before the remote
    /// outcome is known; the remote side reports success or failure through
    /// its own channel.
    pub async fn submit_to(&mut self, op: &dyn CreateOperation) -> Result<bool, CreateError> {
        match self.submit() {
            SubmitAttempt::Accepted(record) => {
                tracing::info!(fields = record.len(), "dispatching record to create operation");
                op.create(record).await?;
                Ok(true)
            }
            SubmitAttempt::Rejected(_) => Ok(false),
        }
    }

    /// Drop all edits and errors, back to pristine. The dialogs' close
    /// handler.
    pub fn reset(&mut self) {
        tracing::debug!("session reset");
        self.record = Record::new();
        self.errors = ErrorMap::new();
        self.state = SessionState::Pristine;
    }
}
