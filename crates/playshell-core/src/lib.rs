//! # playshell-core
//!
//! Core types for the playshell game <-> shell bridge.
//!
//! This crate provides the foundational types used by every bridge
//! implementation:
//! - Wire protocol messages and the outbound envelope
//! - Child profile and save-data payloads
//! - Error types

pub mod error;
pub mod profile;
pub mod protocol;

pub use error::{BridgeError, Result};
pub use profile::{ChildProfile, SavePayload, normalize_saved_data};
pub use protocol::{
    DecodedHost, GameMessage, HOST_TAGS, HostMessage, OutboundEnvelope, decode_host,
    decode_host_text, encode, epoch_millis,
};
