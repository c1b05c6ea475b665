//! History store configuration.

use crate::core::KeyEncoding;
use serde::{Deserialize, Serialize};

/// Default cap on note length, in characters.
pub const DEFAULT_MAX_NOTE_CHARS: usize = 1024;

/// Settings that shape how transitions are keyed and validated.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use statelog::config::HistoryConfig;
/// use statelog::core::KeyEncoding;
///
/// let config = HistoryConfig::from_json(r#"{ "key_encoding": "plain" }"#).unwrap();
/// assert_eq!(config.key_encoding, KeyEncoding::Plain);
/// assert_eq!(config.max_note_chars, 1024);
/// assert!(config.reject_empty_to);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// How primary-key values are joined into reference keys
    pub key_encoding: KeyEncoding,

    /// Longest accepted note, counted in characters
    pub max_note_chars: usize,

    /// Refuse writes whose `to` state is empty.
    ///
    /// Turning this off lets empty targets through; they then read back as
    /// "no last transition".
    pub reject_empty_to: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            key_encoding: KeyEncoding::default(),
            max_note_chars: DEFAULT_MAX_NOTE_CHARS,
            reject_empty_to: true,
        }
    }
}

impl HistoryConfig {
    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
