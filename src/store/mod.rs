//! Record storage.
//!
//! [`RecordStore`] is the seam between the history store and whatever keeps
//! the records: a relational table, a key-value store, or the bundled
//! [`MemoryStore`]. Every implementation uses soft-delete semantics: deleted
//! records keep their row but carry a `deleted_at` timestamp and drop out of
//! normal queries.

mod error;
mod memory;

pub use error::StorageError;
pub use memory::MemoryStore;

use crate::core::{NewTransition, RecordId, TransitionRecord};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Selects the timeline of one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceFilter {
    pub table: String,
    pub key: String,
    /// Also return soft-deleted records
    pub include_deleted: bool,
}

impl ReferenceFilter {
    /// Filter on `(table, key)`, excluding soft-deleted records.
    pub fn new(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key: key.into(),
            include_deleted: false,
        }
    }

    pub fn with_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    /// Whether `record` passes this filter.
    pub fn matches(&self, record: &TransitionRecord) -> bool {
        record.references(&self.table, &self.key) && (self.include_deleted || !record.is_deleted())
    }
}

/// Append-and-query storage for transition records.
///
/// Implementations must assign ids that increase with insertion order and
/// return query results in that order. Sharing one store across threads
/// requires the implementation itself to be safe for concurrent use.
pub trait RecordStore: Send + Sync {
    /// Persist a transition, assigning its id and timestamps.
    fn insert(&self, transition: NewTransition) -> Result<TransitionRecord>;

    /// All records matching `filter`, oldest first.
    fn query(&self, filter: &ReferenceFilter) -> Result<Vec<TransitionRecord>>;

    /// The newest record matching `filter`.
    fn query_last(&self, filter: &ReferenceFilter) -> Result<Option<TransitionRecord>> {
        Ok(self.query(filter)?.pop())
    }

    /// Mark a live record as deleted and return it.
    ///
    /// Fails with [`StorageError::NotFound`] if the id is unknown or the record
    /// is already deleted.
    fn soft_delete(&self, id: RecordId) -> Result<TransitionRecord>;
}

impl<R: RecordStore + ?Sized> RecordStore for std::sync::Arc<R> {
    fn insert(&self, transition: NewTransition) -> Result<TransitionRecord> {
        (**self).insert(transition)
    }

    fn query(&self, filter: &ReferenceFilter) -> Result<Vec<TransitionRecord>> {
        (**self).query(filter)
    }

    fn query_last(&self, filter: &ReferenceFilter) -> Result<Option<TransitionRecord>> {
        (**self).query_last(filter)
    }

    fn soft_delete(&self, id: RecordId) -> Result<TransitionRecord> {
        (**self).soft_delete(id)
    }
}
