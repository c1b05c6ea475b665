//! Read-only history access for administrative tooling.

use super::{HistoryStore, Result};
use crate::core::{Entity, Timeline, TransitionRecord};
use crate::store::RecordStore;

/// Query-only handle on a [`HistoryStore`].
///
/// Management interfaces receive this instead of the store itself. It offers
/// no way to create, update or delete transition records.
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
/// history.record_transition(&Order { id: 1 }, "", "pending", "").unwrap();
///
/// let view = history.view();
/// assert_eq!(view.history_by_key("orders", "1").unwrap().len(), 1);
/// ```
#[derive(Debug)]
pub struct HistoryView<'a, R: RecordStore> {
    store: &'a HistoryStore<R>,
}

impl<R: RecordStore> Clone for HistoryView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: RecordStore> Copy for HistoryView<'_, R> {}

impl<'a, R: RecordStore> HistoryView<'a, R> {
    pub(crate) fn new(store: &'a HistoryStore<R>) -> Self {
        Self { store }
    }

    pub fn reference_key<E: Entity + ?Sized>(&self, entity: &E) -> String {
        self.store.derive_reference_key(entity)
    }

    pub fn history<E: Entity + ?Sized>(&self, entity: &E) -> Result<Vec<TransitionRecord>> {
        self.store.get_history(entity)
    }

    pub fn timeline<E: Entity + ?Sized>(&self, entity: &E) -> Result<Timeline> {
        self.store.get_timeline(entity)
    }

    pub fn last_transition<E: Entity + ?Sized>(
        &self,
        entity: &E,
    ) -> Result<Option<TransitionRecord>> {
        self.store.get_last_transition(entity)
    }

    pub fn history_by_key(&self, table: &str, key: &str) -> Result<Vec<TransitionRecord>> {
        self.store.get_history_by_key(table, key)
    }

    pub fn last_transition_by_key(
        &self,
        table: &str,
        key: &str,
    ) -> Result<Option<TransitionRecord>> {
        self.store.get_last_transition_by_key(table, key)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Entity, KeyField};
    use crate::history::HistoryStore;
    use crate::store::MemoryStore;

    struct Invoice {
        number: String,
    }

    impl Entity for Invoice {
        fn table_name(&self) -> &str {
            "invoices"
        }

        fn primary_key(&self) -> Vec<KeyField> {
            vec![KeyField::new("number", self.number.as_str())]
        }
    }

    #[test]
    fn view_reads_what_the_store_wrote() {
        let history = HistoryStore::new(MemoryStore::new());
        let invoice = Invoice {
            number: "INV-7".to_string(),
        };

        history
            .record_transition(&invoice, "", "issued", "")
            .unwrap();
        history
            .record_transition(&invoice, "issued", "paid", "wire transfer")
            .unwrap();

        let view = history.view();
        assert_eq!(view.reference_key(&invoice), "INV-7");
        assert_eq!(view.history(&invoice).unwrap().len(), 2);
        assert_eq!(view.timeline(&invoice).unwrap().path(), vec!["issued", "paid"]);
        assert_eq!(
            view.last_transition(&invoice).unwrap().map(|r| r.note),
            Some("wire transfer".to_string())
        );
        assert_eq!(
            view.last_transition_by_key("invoices", "INV-7").unwrap(),
            view.last_transition(&invoice).unwrap()
        );
        assert!(view.history_by_key("invoices", "INV-8").unwrap().is_empty());
    }
}
