//! History store errors.

use crate::store::StorageError;
use thiserror::Error;

/// A reason a transition was refused before reaching the store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionViolation {
    #[error("Target state is empty")]
    EmptyTarget,

    #[error("Note is {length} characters long, limit is {max}")]
    NoteTooLong { length: usize, max: usize },
}

/// Errors returned by [`HistoryStore`](super::HistoryStore) operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum HistoryError {
    /// Every check the transition failed, in check order
    #[error("Invalid transition: {}", format_violations(.0))]
    InvalidTransition(Vec<TransitionViolation>),

    /// The entity declares no primary-key fields
    #[error("Entity in table '{table}' has no primary-key fields")]
    DegenerateKey { table: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

fn format_violations(violations: &[TransitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
