//! In-memory record store.

use super::{RecordStore, ReferenceFilter, Result, StorageError};
use crate::core::{NewTransition, RecordId, TransitionRecord};
use chrono::Utc;
use parking_lot::RwLock;

#[derive(Debug)]
struct Inner {
    /// Id handed to the next insert
    next_id: u64,
    /// Kept sorted by id
    records: Vec<TransitionRecord>,
}

/// A [`RecordStore`] that keeps every record in process memory.
///
/// Ids start at 1 and increase by one per insert. Reads take a shared lock
/// and writes an exclusive one, so a single instance can serve many threads.
/// Contents can be persisted with [`MemoryStore::snapshot`].
///
/// # Example
///
/// ```rust
/// use statelog::core::NewTransition;
/// use statelog::store::{MemoryStore, RecordStore, ReferenceFilter};
///
/// let store = MemoryStore::new();
/// let record = store
///     .insert(NewTransition {
///         reference_table: "orders".to_string(),
///         reference_key: "42".to_string(),
///         from: String::new(),
///         to: "pending".to_string(),
///         note: String::new(),
///     })
///     .unwrap();
///
/// assert_eq!(record.id.0, 1);
/// assert_eq!(store.query(&ReferenceFilter::new("orders", "42")).unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }

    /// Rebuild a store from records sorted by id and the next id to assign.
    pub(crate) fn from_parts(next_id: u64, records: Vec<TransitionRecord>) -> Self {
        Self {
            inner: RwLock::new(Inner { next_id, records }),
        }
    }

    /// Copy out the id counter and every record, deleted ones included.
    pub(crate) fn to_parts(&self) -> (u64, Vec<TransitionRecord>) {
        let inner = self.inner.read();
        (inner.next_id, inner.records.clone())
    }

    /// Number of records held, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn insert(&self, transition: NewTransition) -> Result<TransitionRecord> {
        let mut inner = self.inner.write();
        let id = RecordId(inner.next_id);
        inner.next_id = inner
            .next_id
            .checked_add(1)
            .ok_or_else(|| StorageError::Constraint("record id space exhausted".to_string()))?;

        let record = transition.into_record(id, Utc::now());
        inner.records.push(record.clone());
        Ok(record)
    }

    fn query(&self, filter: &ReferenceFilter) -> Result<Vec<TransitionRecord>> {
        let inner = self.inner.read();
        Ok(inner
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    fn query_last(&self, filter: &ReferenceFilter) -> Result<Option<TransitionRecord>> {
        let inner = self.inner.read();
        Ok(inner
            .records
            .iter()
            .rev()
            .find(|r| filter.matches(r))
            .cloned())
    }

    fn soft_delete(&self, id: RecordId) -> Result<TransitionRecord> {
        let mut inner = self.inner.write();
        let index = inner
            .records
            .binary_search_by_key(&id, |r| r.id)
            .map_err(|_| StorageError::NotFound { id })?;

        let record = &mut inner.records[index];
        if record.is_deleted() {
            return Err(StorageError::NotFound { id });
        }

        let now = Utc::now();
        record.deleted_at = Some(now);
        record.updated_at = now;
        Ok(record.clone())
    }
}
