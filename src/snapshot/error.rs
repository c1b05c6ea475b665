//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Encoding to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot was written by an incompatible format version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot contents are inconsistent
    #[error("Snapshot validation failed: {0}")]
    ValidationFailed(String),
}
