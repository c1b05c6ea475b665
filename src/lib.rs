//! Statelog: append-only state change history for keyed entities
//!
//! Statelog records "state change" entries (a `from` state, a `to` state and
//! a note) against the entity they describe, and reads them back either as
//! the entity's full history or as its most recent transition.
//!
//! # Core Concepts
//!
//! - **Entity**: Declares its table name and primary-key fields via the `Entity` trait
//! - **Reference key**: Deterministic string built from an entity's primary-key values
//! - **RecordStore**: Pluggable storage backend with soft-delete semantics
//! - **HistoryStore**: Derives keys, validates transitions and mediates all reads and writes
//!
//! # Example
//!
//! ```rust
//! use statelog::history::HistoryStore;
//! use statelog::store::MemoryStore;
//! use statelog::entity;
//!
//! struct Order {
//!     id: u64,
//! }
//!
//! entity!(Order, table: "orders", keys: [id]);
//!
//! let history = HistoryStore::new(MemoryStore::new());
//! let order = Order { id: 42 };
//!
//! history.record_transition(&order, "", "pending", "").unwrap();
//! history.record_transition(&order, "pending", "shipped", "").unwrap();
//!
//! let records = history.get_history(&order).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].reference_key, "42");
//!
//! let last = history.get_last_transition(&order).unwrap().unwrap();
//! assert_eq!(last.to, "shipped");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod history;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use builder::HistoryStoreBuilder;
pub use config::HistoryConfig;
pub use self::core::{Entity, KeyField, KeyValue, State, TransitionRecord};
pub use history::{HistoryError, HistoryStore, HistoryView};
pub use store::{MemoryStore, RecordStore, StorageError};
