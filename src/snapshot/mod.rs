//! Saving and restoring in-memory record stores.
//!
//! A [`Snapshot`] captures every record of a [`MemoryStore`], soft-deleted
//! ones included, together with the id counter. It can be written as JSON or
//! as compact binary and restored into a fresh store after a restart.

use crate::core::TransitionRecord;
use crate::store::MemoryStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable copy of a record store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// Id the store hands out next
    pub next_id: u64,

    /// All records, ordered by id
    pub records: Vec<TransitionRecord>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the version and that record ids are strictly increasing and
    /// below `next_id`.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        if self.next_id == 0 {
            return Err(SnapshotError::ValidationFailed(
                "next id must be at least 1".to_string(),
            ));
        }

        if let Some(pair) = self.records.windows(2).find(|w| w[0].id >= w[1].id) {
            return Err(SnapshotError::ValidationFailed(format!(
                "record {} follows record {}, ids must strictly increase",
                pair[1].id, pair[0].id
            )));
        }

        if let Some(last) = self.records.last() {
            if last.id.0 >= self.next_id {
                return Err(SnapshotError::ValidationFailed(format!(
                    "record {} is not below next id {}",
                    last.id, self.next_id
                )));
            }
        }

        Ok(())
    }
}

impl MemoryStore {
    /// Capture the current contents of the store.
    pub fn snapshot(&self) -> Snapshot {
        let (next_id, records) = self.to_parts();
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            taken_at: Utc::now(),
            next_id,
            records,
        };
        debug!(
            id = %snapshot.id,
            records = snapshot.records.len(),
            "took record store snapshot"
        );
        snapshot
    }

    /// Build a store holding exactly the snapshot's records.
    pub fn restore(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        snapshot.validate()?;
        info!(
            id = %snapshot.id,
            records = snapshot.records.len(),
            "restoring record store from snapshot"
        );
        Ok(Self::from_parts(snapshot.next_id, snapshot.records))
    }
}
