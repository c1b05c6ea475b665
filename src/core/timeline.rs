//! Ordered view over one entity's transition records.

use super::record::TransitionRecord;
use std::time::Duration;

/// The live (non-deleted) history of one entity, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    records: Vec<TransitionRecord>,
}

impl Timeline {
    /// Wrap records that are already in insertion order.
    pub fn new(records: Vec<TransitionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TransitionRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recent record, regardless of its `to` value.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// State labels traversed: the first record's `from`, then every `to`.
    ///
    /// A leading empty `from` (the entity had no prior state) is skipped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use statelog::core::{NewTransition, RecordId, Timeline};
    /// use chrono::Utc;
    ///
    /// let step = |id, from: &str, to: &str| {
    ///     NewTransition {
    ///         reference_table: "orders".to_string(),
    ///         reference_key: "42".to_string(),
    ///         from: from.to_string(),
    ///         to: to.to_string(),
    ///         note: String::new(),
    ///     }
    ///     .into_record(RecordId(id), Utc::now())
    /// };
    ///
    /// let timeline = Timeline::new(vec![step(1, "", "pending"), step(2, "pending", "shipped")]);
    /// assert_eq!(timeline.path(), vec!["pending", "shipped"]);
    /// ```
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            if !first.from.is_empty() {
                path.push(first.from.as_str());
            }
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Time elapsed between the first and the last record.
    ///
    /// `None` for an empty timeline.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.created_at
            .signed_duration_since(first.created_at)
            .to_std()
            .ok()
    }
}

impl IntoIterator for Timeline {
    type Item = TransitionRecord;
    type IntoIter = std::vec::IntoIter<TransitionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
