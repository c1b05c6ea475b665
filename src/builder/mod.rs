//! Builder API for assembling history stores.
//!
//! This module provides a fluent builder and declaration macros for wiring a
//! [`HistoryStore`] to its record store and configuration.

pub mod error;
pub mod macros;

pub use error::BuildError;

use crate::config::HistoryConfig;
use crate::core::KeyEncoding;
use crate::history::HistoryStore;
use crate::store::RecordStore;

/// Fluent builder for [`HistoryStore`].
///
/// # Example
///
/// ```
/// use statelog::builder::HistoryStoreBuilder;
/// use statelog::core::KeyEncoding;
/// use statelog::store::MemoryStore;
///
/// let history = HistoryStoreBuilder::new()
///     .store(MemoryStore::new())
///     .key_encoding(KeyEncoding::Plain)
///     .max_note_chars(256)
///     .build()
///     .unwrap();
///
/// assert_eq!(history.config().max_note_chars, 256);
/// ```
pub struct HistoryStoreBuilder<R: RecordStore> {
    store: Option<R>,
    config: HistoryConfig,
}

impl<R: RecordStore> HistoryStoreBuilder<R> {
    pub fn new() -> Self {
        Self {
            store: None,
            config: HistoryConfig::default(),
        }
    }

    /// Set the record store that persists transitions
    pub fn store(mut self, store: R) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: HistoryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn key_encoding(mut self, encoding: KeyEncoding) -> Self {
        self.config.key_encoding = encoding;
        self
    }

    pub fn max_note_chars(mut self, max: usize) -> Self {
        self.config.max_note_chars = max;
        self
    }

    pub fn reject_empty_to(mut self, reject: bool) -> Self {
        self.config.reject_empty_to = reject;
        self
    }

    /// Build the history store
    pub fn build(self) -> Result<HistoryStore<R>, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        if self.config.max_note_chars == 0 {
            return Err(BuildError::ZeroNoteLimit);
        }
        Ok(HistoryStore::with_config(store, self.config))
    }
}

impl<R: RecordStore> Default for HistoryStoreBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
