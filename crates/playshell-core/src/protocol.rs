//! Wire protocol for game <-> shell communication
//!
//! Messages are serialized as JSON with internally-tagged enums.
//! Format: {"type": "MESSAGE_TAG", ...fields, "timestamp": <epoch-ms>}
//!
//! Tags are SCREAMING_SNAKE_CASE; payload fields are camelCase.

use crate::error::{BridgeError, Result};
use crate::profile::ChildProfile;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

/// Messages sent from the game to the shell
///
/// Note: `rename_all` on enums only affects variant names, not field names
/// inside variants. Multi-word fields are explicitly renamed to camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameMessage {
    /// Game has finished loading and is ready to play
    Ready,

    /// In-game score changed
    ScoreUpdate { score: i64 },

    /// A level was completed
    LevelComplete { level: u32, score: i64, stars: u8 },

    /// Game requests its progress be persisted
    SaveProgress { data: String },

    /// Game session ended
    GameOver {
        #[serde(rename = "finalScore")]
        final_score: i64,
    },

    /// Game asks the shell to close it
    Exit,
}

/// Messages sent from the shell to the game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostMessage {
    /// Session start: who is playing and any previously saved progress
    Init {
        #[serde(flatten)]
        profile: ChildProfile,
        #[serde(rename = "savedData", default)]
        saved_data: Option<Value>,
    },

    /// Shell pushes saved progress outside of INIT
    LoadProgress { data: Value },

    /// Shell paused the game (app backgrounded, parent gate, etc.)
    Pause,

    /// Shell resumed the game
    Resume,

    /// Shell acknowledges a SAVE_PROGRESS
    SaveConfirmed { success: bool },
}

/// Tags this bridge routes; anything else is logged and dropped
pub const HOST_TAGS: [&str; 5] = ["INIT", "LOAD_PROGRESS", "PAUSE", "RESUME", "SAVE_CONFIRMED"];

/// Outcome of decoding an inbound payload
///
/// An unknown tag is not a decode error: shells ship messages for newer
/// SDKs, and the contract is to ignore what we do not understand.
#[derive(Debug)]
pub enum DecodedHost {
    /// A message this bridge routes
    Message(HostMessage),
    /// Valid envelope with a tag outside [`HOST_TAGS`]
    Unrecognized { tag: String },
}

/// Outbound envelope: a tagged message plus the epoch-ms timestamp
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutboundEnvelope {
    #[serde(flatten)]
    pub message: GameMessage,
    pub timestamp: u64,
}

impl OutboundEnvelope {
    /// Wrap a message with the current wall-clock timestamp
    pub fn stamp(message: GameMessage) -> Self {
        Self {
            message,
            timestamp: epoch_millis(),
        }
    }
}

/// Milliseconds since the Unix epoch
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Serialize an outbound envelope to its wire string
pub fn encode(envelope: &OutboundEnvelope) -> Result<String> {
    serde_json::to_string(envelope).map_err(|e| BridgeError::Serialization(e.to_string()))
}

/// Decode an already-structured inbound payload
///
/// The tag is probed before typed deserialization so an unknown tag can be
/// reported as [`DecodedHost::Unrecognized`] instead of a decode error.
pub fn decode_host(value: &Value) -> Result<DecodedHost> {
    let tag = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(BridgeError::MissingTag)?;

    if !HOST_TAGS.contains(&tag) {
        return Ok(DecodedHost::Unrecognized {
            tag: tag.to_string(),
        });
    }

    let message = serde_json::from_value(value.clone())?;
    Ok(DecodedHost::Message(message))
}

/// Parse a textual inbound payload, then decode it
pub fn decode_host_text(text: &str) -> Result<DecodedHost> {
    let value: Value = serde_json::from_str(text)?;
    decode_host(&value)
}
