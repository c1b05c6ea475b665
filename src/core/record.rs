//! Transition records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a transition record.
///
/// Identifiers increase monotonically in insertion order, so comparing two
/// ids of the same store tells which record was written later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transition that has not been persisted yet.
///
/// The store turns it into a [`TransitionRecord`] by assigning an id and
/// timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTransition {
    pub reference_table: String,
    pub reference_key: String,
    pub from: String,
    pub to: String,
    pub note: String,
}

impl NewTransition {
    /// Persist this transition under `id` at time `now`.
    pub fn into_record(self, id: RecordId, now: DateTime<Utc>) -> TransitionRecord {
        TransitionRecord {
            id,
            reference_table: self.reference_table,
            reference_key: self.reference_key,
            from: self.from,
            to: self.to,
            note: self.note,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }
}

/// One logged state change of one entity.
///
/// Records are immutable once created, apart from the soft-delete marker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub id: RecordId,
    /// Collection the referenced entity belongs to
    pub reference_table: String,
    /// Reference key of the entity within its collection
    pub reference_key: String,
    pub from: String,
    pub to: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the record has been soft-deleted
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TransitionRecord {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Whether the record belongs to the timeline of `(table, key)`.
    pub fn references(&self, table: &str, key: &str) -> bool {
        self.reference_table == table && self.reference_key == key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_transition() -> NewTransition {
        NewTransition {
            reference_table: "orders".to_string(),
            reference_key: "42".to_string(),
            from: "pending".to_string(),
            to: "shipped".to_string(),
            note: "left the warehouse".to_string(),
        }
    }

    #[test]
    fn into_record_sets_id_and_timestamps() {
        let now = Utc::now();
        let record = new_transition().into_record(RecordId(3), now);

        assert_eq!(record.id, RecordId(3));
        assert_eq!(record.created_at, now);
        assert_eq!(record.updated_at, now);
        assert!(!record.is_deleted());
        assert!(record.references("orders", "42"));
        assert!(!record.references("orders", "43"));
        assert!(!record.references("invoices", "42"));
    }

    #[test]
    fn record_id_orders_by_value() {
        assert!(RecordId(1) < RecordId(2));
        assert_eq!(RecordId(9).to_string(), "9");
    }

    #[test]
    fn record_serializes_correctly() {
        let record = new_transition().into_record(RecordId(1), Utc::now());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"id\":1"));

        let deserialized: TransitionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
