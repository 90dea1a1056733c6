//! Typed bridge events and the listener registry
//!
//! Inbound routing emits one [`BridgeEvent`] per recognized message.
//! Listeners subscribe per [`EventKind`] and run in registration order; a
//! misbehaving listener is logged and skipped, never allowed to stop the
//! rest of the emission or the bridge itself.

use playshell_core::ChildProfile;
use std::collections::HashMap;
use tracing::{debug, error};

/// The closed set of events the bridge emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Init,
    LoadProgress,
    Pause,
    Resume,
    SaveConfirmed,
}

/// An event with its typed payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// Session started; profile and any previously saved progress
    Init {
        profile: ChildProfile,
        saved_data: Option<String>,
    },
    /// Saved progress pushed by the shell
    LoadProgress { data: Option<String> },
    /// Shell paused the game
    Pause,
    /// Shell resumed the game
    Resume,
    /// Shell acknowledged a save
    SaveConfirmed { success: bool },
}

impl BridgeEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BridgeEvent::Init { .. } => EventKind::Init,
            BridgeEvent::LoadProgress { .. } => EventKind::LoadProgress,
            BridgeEvent::Pause => EventKind::Pause,
            BridgeEvent::Resume => EventKind::Resume,
            BridgeEvent::SaveConfirmed { .. } => EventKind::SaveConfirmed,
        }
    }
}

/// A listener callback
///
/// Returning `Err` marks this invocation as failed; the registry logs it
/// and keeps going. Closures have no identity in Rust, so removal goes
/// through the [`ListenerId`] handed back by [`ListenerRegistry::on`].
pub type Callback = Box<dyn FnMut(&BridgeEvent) -> anyhow::Result<()>>;

/// Handle for removing a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

/// Per-kind ordered listener lists
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: HashMap<EventKind, Vec<(ListenerId, Callback)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for one event kind; later registrations run later
    pub fn on(&mut self, kind: EventKind, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(kind).or_default().push((id, callback));
        id
    }

    /// Remove a previously registered callback; unknown ids are a no-op
    pub fn off(&mut self, kind: EventKind, id: ListenerId) {
        if let Some(entries) = self.listeners.get_mut(&kind) {
            entries.retain(|(entry_id, _)| *entry_id != id);
        }
    }

    /// Invoke every listener for the event's kind, in registration order
    ///
    /// Each invocation is isolated: one listener failing does not prevent
    /// the listeners after it from running.
    pub fn emit(&mut self, event: &BridgeEvent) {
        let kind = event.kind();
        let Some(entries) = self.listeners.get_mut(&kind) else {
            debug!("No listeners for {kind:?}");
            return;
        };

        for (id, callback) in entries.iter_mut() {
            if let Err(e) = callback(event) {
                error!("Listener {id:?} for {kind:?} failed: {e:#}");
            }
        }
    }
}
