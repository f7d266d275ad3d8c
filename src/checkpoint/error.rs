//! Checkpoint error types.

use thiserror::Error;

/// Errors returned when encoding, decoding, or resuming a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint encoding failed: {0}")]
    SerializationFailed(String),

    #[error("Checkpoint decoding failed: {0}")]
    DeserializationFailed(String),

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint was taken against a different configuration
    #[error("Checkpoint does not match configuration: {0}")]
    ConfigMismatch(String),
}
