//! Bridge between an embedded game and the playshell host application
//!
//! This crate provides:
//! - The [`Transport`] seam over the shell's string channel
//! - [`GameBridge`]: outbound dispatch, inbound routing, session state
//! - Typed events with an ordered, isolated listener registry

pub mod bridge;
pub mod events;
pub mod transport;

pub use bridge::GameBridge;
pub use events::{BridgeEvent, Callback, EventKind, ListenerId, ListenerRegistry};
pub use transport::{MemoryTransport, Transport, WriterTransport};
