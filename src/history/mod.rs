//! The history store.
//!
//! [`HistoryStore`] turns entity descriptors into reference keys and mediates
//! every read and write of their transition history. It keeps no mutable
//! state of its own; all persistence goes through the injected
//! [`RecordStore`].

mod error;
mod validation;
mod view;

pub use error::{HistoryError, TransitionViolation};
pub use view::HistoryView;

use crate::config::HistoryConfig;
use crate::core::{
    derive_reference_key, encode_reference_key, Entity, NewTransition, RecordId, State, Timeline,
    TransitionRecord,
};
use crate::store::{RecordStore, ReferenceFilter};
use tracing::{debug, warn};

/// Result type for history operations.
pub type Result<T> = std::result::Result<T, HistoryError>;

/// Records and retrieves the state change history of entities.
///
/// # Example
///
/// ```rust
/// use statelog::entity;
/// use statelog::history::HistoryStore;
/// use statelog::store::MemoryStore;
///
/// struct Order {
///     id: u64,
/// }
///
/// entity!(Order, table: "orders", keys: [id]);
///
/// let history = HistoryStore::new(MemoryStore::new());
/// let order = Order { id: 42 };
///
/// history.record_transition(&order, "", "pending", "").unwrap();
/// history.record_transition(&order, "pending", "shipped", "tracking 1Z999").unwrap();
///
/// assert_eq!(history.derive_reference_key(&order), "42");
/// assert_eq!(history.get_history(&order).unwrap().len(), 2);
/// assert_eq!(history.get_last_transition(&order).unwrap().unwrap().to, "shipped");
/// ```
#[derive(Debug)]
pub struct HistoryStore<R: RecordStore> {
    store: R,
    config: HistoryConfig,
}

impl<R: RecordStore> HistoryStore<R> {
    /// Create a history store with the default configuration.
    pub fn new(store: R) -> Self {
        Self::with_config(store, HistoryConfig::default())
    }

    pub fn with_config(store: R, config: HistoryConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// The underlying record store.
    pub fn record_store(&self) -> &R {
        &self.store
    }

    /// Read-only access for administrative tooling.
    pub fn view(&self) -> HistoryView<'_, R> {
        HistoryView::new(self)
    }

    /// Reference key of `entity` under this store's key encoding.
    pub fn derive_reference_key<E: Entity + ?Sized>(&self, entity: &E) -> String {
        derive_reference_key(entity, self.config.key_encoding)
    }

    fn filter_for<E: Entity + ?Sized>(&self, entity: &E) -> ReferenceFilter {
        ReferenceFilter::new(entity.table_name(), self.derive_reference_key(entity))
    }

    /// Append a `from -> to` transition to the entity's history.
    ///
    /// The transition is validated first; every violation is reported in a
    /// single [`HistoryError::InvalidTransition`]. Entities without
    /// primary-key fields are refused with [`HistoryError::DegenerateKey`]
    /// since their histories would all share one key.
    pub fn record_transition<E: Entity + ?Sized>(
        &self,
        entity: &E,
        from: &str,
        to: &str,
        note: &str,
    ) -> Result<TransitionRecord> {
        let fields = entity.primary_key();
        if fields.is_empty() {
            return Err(HistoryError::DegenerateKey {
                table: entity.table_name().to_string(),
            });
        }

        let found = validation::violations(validation::validate_transition(to, note, &self.config));
        if !found.is_empty() {
            return Err(HistoryError::InvalidTransition(found));
        }

        let transition = NewTransition {
            reference_table: entity.table_name().to_string(),
            reference_key: encode_reference_key(&fields, self.config.key_encoding),
            from: from.to_string(),
            to: to.to_string(),
            note: note.to_string(),
        };

        let record = self.store.insert(transition)?;
        debug!(
            table = %record.reference_table,
            key = %record.reference_key,
            id = %record.id,
            from = %record.from,
            to = %record.to,
            "recorded state transition"
        );
        Ok(record)
    }

    /// Record a transition between typed states, stored by their names.
    pub fn record_state_change<E, S>(
        &self,
        entity: &E,
        from: Option<&S>,
        to: &S,
        note: &str,
    ) -> Result<TransitionRecord>
    where
        E: Entity + ?Sized,
        S: State,
    {
        self.record_transition(entity, from.map_or("", |s| s.name()), to.name(), note)
    }

    /// Live records of the entity, oldest first.
    pub fn get_history<E: Entity + ?Sized>(&self, entity: &E) -> Result<Vec<TransitionRecord>> {
        self.query(&self.filter_for(entity))
    }

    /// Live records of the entity as a [`Timeline`].
    pub fn get_timeline<E: Entity + ?Sized>(&self, entity: &E) -> Result<Timeline> {
        self.get_history(entity).map(Timeline::new)
    }

    /// The entity's most recent live transition.
    ///
    /// Returns `None` when there is no history, and also when the newest
    /// record has an empty `to` state.
    pub fn get_last_transition<E: Entity + ?Sized>(
        &self,
        entity: &E,
    ) -> Result<Option<TransitionRecord>> {
        self.query_last(&self.filter_for(entity))
    }

    /// Live records stored under an already-derived reference key.
    pub fn get_history_by_key(&self, table: &str, key: &str) -> Result<Vec<TransitionRecord>> {
        self.query(&ReferenceFilter::new(table, key))
    }

    /// Most recent live record stored under an already-derived reference key.
    pub fn get_last_transition_by_key(
        &self,
        table: &str,
        key: &str,
    ) -> Result<Option<TransitionRecord>> {
        self.query_last(&ReferenceFilter::new(table, key))
    }

    /// Soft-delete one record, hiding it from every query.
    pub fn soft_delete(&self, id: RecordId) -> Result<TransitionRecord> {
        let record = self.store.soft_delete(id)?;
        warn!(
            table = %record.reference_table,
            key = %record.reference_key,
            id = %record.id,
            "soft-deleted state transition"
        );
        Ok(record)
    }

    fn query(&self, filter: &ReferenceFilter) -> Result<Vec<TransitionRecord>> {
        let records = self.store.query(filter)?;
        debug!(
            table = %filter.table,
            key = %filter.key,
            count = records.len(),
            "loaded state history"
        );
        Ok(records)
    }

    fn query_last(&self, filter: &ReferenceFilter) -> Result<Option<TransitionRecord>> {
        match self.store.query_last(filter)? {
            Some(record) if record.to.is_empty() => {
                warn!(
                    table = %filter.table,
                    key = %filter.key,
                    id = %record.id,
                    "latest state transition has an empty target, treating as absent"
                );
                Ok(None)
            }
            other => Ok(other),
        }
    }
}
