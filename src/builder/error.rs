//! Build errors for the history store builder.

use thiserror::Error;

/// Errors that can occur when building a history store.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Record store not specified. Call .store(store) before .build()")]
    MissingStore,

    #[error("Note limit must be at least one character")]
    ZeroNoteLimit,
}
