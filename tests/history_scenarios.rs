//! End-to-end scenarios through the public API.

use statelog::core::{Entity, KeyEncoding, State};
use statelog::history::{HistoryError, HistoryStore, TransitionViolation};
use statelog::snapshot::Snapshot;
use statelog::store::MemoryStore;
use statelog::{entity, state_enum, HistoryConfig, HistoryStoreBuilder};
use std::sync::Arc;
use std::thread;

struct Order {
    id: u64,
}

entity!(Order, table: "orders", keys: [id]);

struct Shipment {
    order_id: u64,
    region: String,
}

entity!(Shipment, table: "shipments", keys: [order_id, region]);

state_enum! {
    enum OrderState {
        Pending => "pending",
        Shipped => "shipped",
        Delivered => "delivered",
    }
}

#[test]
fn order_lifecycle() {
    let history = HistoryStore::new(MemoryStore::new());
    let order = Order { id: 42 };

    assert_eq!(history.derive_reference_key(&order), "42");

    history.record_transition(&order, "", "pending", "").unwrap();
    history
        .record_transition(&order, "pending", "shipped", "")
        .unwrap();

    let records = history.get_history(&order).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        (records[0].from.as_str(), records[0].to.as_str()),
        ("", "pending")
    );
    assert_eq!(
        (records[1].from.as_str(), records[1].to.as_str()),
        ("pending", "shipped")
    );

    let last = history.get_last_transition(&order).unwrap().unwrap();
    assert_eq!(last.to, "shipped");
    assert_eq!(last.reference_table, "orders");
}

#[test]
fn composite_key() {
    let history = HistoryStore::new(MemoryStore::new());
    let shipment = Shipment {
        order_id: 7,
        region: "US".to_string(),
    };

    assert_eq!(history.derive_reference_key(&shipment), "7::US");

    let record = history
        .record_transition(&shipment, "", "packed", "")
        .unwrap();
    assert_eq!(record.reference_key, "7::US");
    assert_eq!(record.reference_table, "shipments");
}

#[test]
fn typed_states_build_a_timeline() {
    let history = HistoryStore::new(MemoryStore::new());
    let order = Order { id: 1 };

    history
        .record_state_change(&order, None, &OrderState::Pending, "")
        .unwrap();
    history
        .record_state_change(&order, Some(&OrderState::Pending), &OrderState::Shipped, "")
        .unwrap();
    history
        .record_state_change(
            &order,
            Some(&OrderState::Shipped),
            &OrderState::Delivered,
            "signed by recipient",
        )
        .unwrap();

    let timeline = history.get_timeline(&order).unwrap();
    assert_eq!(timeline.path(), vec!["pending", "shipped", "delivered"]);
    assert!(timeline.duration().is_some());
    assert_eq!(
        timeline.last().map(|r| r.to.as_str()),
        Some(OrderState::Delivered.name())
    );
}

#[test]
fn invalid_transition_reports_all_problems() {
    let history = HistoryStoreBuilder::new()
        .store(MemoryStore::new())
        .max_note_chars(5)
        .build()
        .unwrap();

    let err = history
        .record_transition(&Order { id: 1 }, "pending", "", "far too long")
        .unwrap_err();

    match err {
        HistoryError::InvalidTransition(violations) => {
            assert_eq!(violations.len(), 2);
            assert!(violations.contains(&TransitionViolation::EmptyTarget));
        }
        other => panic!("Expected InvalidTransition, got {other:?}"),
    }
    assert!(history.get_history(&Order { id: 1 }).unwrap().is_empty());
}

#[test]
fn config_loaded_from_json_drives_the_store() {
    let config =
        HistoryConfig::from_json(r#"{ "key_encoding": "plain", "reject_empty_to": false }"#)
            .unwrap();
    let history = HistoryStoreBuilder::new()
        .store(MemoryStore::new())
        .config(config)
        .build()
        .unwrap();

    assert_eq!(history.config().key_encoding, KeyEncoding::Plain);

    let order = Order { id: 8 };
    history.record_transition(&order, "", "pending", "").unwrap();
    history.record_transition(&order, "pending", "", "").unwrap();

    assert_eq!(history.get_history(&order).unwrap().len(), 2);
    assert!(history.get_last_transition(&order).unwrap().is_none());
}

#[test]
fn shared_store_across_threads() {
    let history = Arc::new(HistoryStore::new(MemoryStore::new()));

    let handles: Vec<_> = (0..4u64)
        .map(|id| {
            let history = Arc::clone(&history);
            thread::spawn(move || {
                let order = Order { id };
                for step in 0..10 {
                    history
                        .record_transition(&order, "", &format!("step-{step}"), "")
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for id in 0..4 {
        let records = history.get_history(&Order { id }).unwrap();
        let states: Vec<_> = records.iter().map(|r| r.to.clone()).collect();
        let expected: Vec<_> = (0..10).map(|step| format!("step-{step}")).collect();
        assert_eq!(states, expected);
    }
}

#[test]
fn history_survives_snapshot_restore() {
    let store = MemoryStore::new();
    let history = HistoryStore::new(store);
    let order = Order { id: 42 };

    history.record_transition(&order, "", "pending", "").unwrap();
    let shipped = history
        .record_transition(&order, "pending", "shipped", "")
        .unwrap();
    history.soft_delete(shipped.id).unwrap();

    let bytes = history.record_store().snapshot().to_bytes().unwrap();
    let restored = MemoryStore::restore(Snapshot::from_bytes(&bytes).unwrap()).unwrap();
    let history = HistoryStore::new(restored);

    let records = history.get_history(&order).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].to, "pending");

    let next = history
        .record_transition(&order, "pending", "cancelled", "")
        .unwrap();
    assert!(next.id > shipped.id);
}

#[test]
fn admin_view_reads_without_writing() {
    let history = HistoryStore::new(MemoryStore::new());
    let order = Order { id: 5 };
    history.record_transition(&order, "", "pending", "").unwrap();

    let view = history.view();
    let key = view.reference_key(&order);

    assert_eq!(view.history(&order).unwrap().len(), 1);
    assert_eq!(
        view.last_transition_by_key(order.table_name(), &key)
            .unwrap()
            .map(|r| r.to),
        Some("pending".to_string())
    );
}
