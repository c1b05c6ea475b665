//! Core history types.
//!
//! This module contains the pure part of the crate:
//! - Entity descriptors via the `Entity` trait
//! - Reference key derivation
//! - Transition records and timelines
//!
//! Nothing here touches storage.

mod entity;
mod key;
mod record;
mod state;
mod timeline;

pub use entity::Entity;
pub use key::{
    derive_reference_key, encode_reference_key, KeyEncoding, KeyField, KeyValue, KEY_SEPARATOR,
};
pub use record::{NewTransition, RecordId, TransitionRecord};
pub use state::State;
pub use timeline::Timeline;
