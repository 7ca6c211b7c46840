//! Error types for encoding and decoding messages.

/// Errors raised while converting messages to or from JSON.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// JSON (de)serialization failed, including unknown message types
    #[error("Failed to (de)serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid message format: {0}")]
    InvalidFormat(String),
}
