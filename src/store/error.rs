//! Storage error types.

use crate::core::RecordId;
use thiserror::Error;

/// Failures surfaced by a record store.
///
/// History operations hand these back to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    /// The backing store could not be reached
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// No live record carries the given id
    #[error("Transition record {id} not found")]
    NotFound { id: RecordId },

    /// Any other backend failure
    #[error("Record store failure: {0}")]
    Backend(String),
}
