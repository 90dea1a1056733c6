//! Error types for the playshell bridge

use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Bridge error types
///
/// None of these ever reach the embedding game as a failure: the
/// `GameBridge` boundary absorbs them into diagnostic logs. They exist so
/// transports and decode internals can propagate with `?` up to that
/// boundary.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Inbound payload was not valid JSON or did not match its tag's shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// Inbound payload had no string `type` discriminator
    #[error("Message has no string \"type\" field")]
    MissingTag,

    /// Outbound serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Transport send failed
    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Decode(err.to_string())
    }
}
