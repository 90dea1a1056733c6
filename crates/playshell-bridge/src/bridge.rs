//! The game-side bridge: outbound dispatch, inbound routing, session state
//!
//! One [`GameBridge`] per embedded game instance, owned by the caller. All
//! mutation happens on the caller's thread with run-to-completion per
//! message; there is no locking because there is nothing to lock against.
//!
//! Nothing here ever fails toward the game: a missing transport, a broken
//! payload, or a misbehaving listener is logged and absorbed. The bridge
//! must not be able to take its host down.

use crate::events::{BridgeEvent, Callback, EventKind, ListenerId, ListenerRegistry};
use crate::transport::Transport;
use playshell_core::{
    ChildProfile, DecodedHost, GameMessage, HostMessage, OutboundEnvelope, SavePayload,
    decode_host, decode_host_text, encode, normalize_saved_data,
};
use serde_json::Value;
use tracing::{debug, error, warn};

/// Bridge between an embedded game and the host shell
pub struct GameBridge {
    /// Outbound channel into the shell; `None` when running outside one
    transport: Option<Box<dyn Transport>>,
    /// Who is playing; set by the first INIT
    profile: Option<ChildProfile>,
    /// Latest saved progress; INIT and LOAD_PROGRESS overwrite, never merge
    saved_data: Option<String>,
    /// Tracks the most recent PAUSE/RESUME
    paused: bool,
    listeners: ListenerRegistry,
}

impl GameBridge {
    /// Create a bridge wired to a shell transport
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Some(Box::new(transport)),
            profile: None,
            saved_data: None,
            paused: false,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Create a bridge with no shell attached
    ///
    /// Games run this way in a plain browser tab during development.
    /// Outbound calls degrade to diagnostic logs and no inbound messages
    /// ever arrive.
    pub fn detached() -> Self {
        Self {
            transport: None,
            profile: None,
            saved_data: None,
            paused: false,
            listeners: ListenerRegistry::new(),
        }
    }

    // === Outbound dispatch ===

    /// Tell the shell the game has loaded and is ready to play
    pub fn ready(&mut self) {
        self.dispatch(GameMessage::Ready);
    }

    /// Report an in-game score change
    pub fn score_update(&mut self, score: i64) {
        self.dispatch(GameMessage::ScoreUpdate { score });
    }

    /// Report a completed level with no star rating
    pub fn level_complete(&mut self, level: u32, score: i64) {
        self.level_complete_with_stars(level, score, 0);
    }

    /// Report a completed level
    ///
    /// `stars` is expected to be 0-3 but is passed through unvalidated.
    pub fn level_complete_with_stars(&mut self, level: u32, score: i64, stars: u8) {
        self.dispatch(GameMessage::LevelComplete {
            level,
            score,
            stars,
        });
    }

    /// Ask the shell to persist progress
    ///
    /// Accepts a ready-made string (sent verbatim) or a structured value
    /// (compact-serialized first).
    pub fn save_progress(&mut self, data: impl Into<SavePayload>) {
        self.dispatch(GameMessage::SaveProgress {
            data: data.into().into_wire_string(),
        });
    }

    /// Report the end of the game session
    pub fn game_over(&mut self, final_score: i64) {
        self.dispatch(GameMessage::GameOver { final_score });
    }

    /// Ask the shell to close the game
    pub fn exit_game(&mut self) {
        self.dispatch(GameMessage::Exit);
    }

    /// Backward-compatible alias for [`GameBridge::exit_game`]
    pub fn close_game(&mut self) {
        self.exit_game();
    }

    /// Backward-compatible alias for [`GameBridge::score_update`]
    pub fn update_score(&mut self, score: i64) {
        self.score_update(score);
    }

    /// Backward-compatible alias for [`GameBridge::game_over`]
    pub fn end_game(&mut self, final_score: i64) {
        self.game_over(final_score);
    }

    /// Stamp, serialize, and send exactly one envelope
    fn dispatch(&mut self, message: GameMessage) {
        let envelope = OutboundEnvelope::stamp(message);
        let line = match encode(&envelope) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to serialize outbound message: {e}");
                return;
            }
        };

        match self.transport.as_mut() {
            Some(transport) => {
                debug!("[game->shell] {line}");
                if let Err(e) = transport.send(&line) {
                    error!("Transport send failed: {e}");
                }
            }
            None => {
                debug!("Not embedded in a shell, dropping outbound: {line}");
            }
        }
    }

    // === Inbound routing ===

    /// Route a textual inbound payload
    pub fn handle_text(&mut self, text: &str) {
        match decode_host_text(text) {
            Ok(decoded) => self.route(decoded),
            Err(e) => warn!("Dropping malformed inbound message: {e}"),
        }
    }

    /// Route an already-structured inbound payload
    pub fn handle_value(&mut self, value: &Value) {
        match decode_host(value) {
            Ok(decoded) => self.route(decoded),
            Err(e) => warn!("Dropping malformed inbound message: {e}"),
        }
    }

    fn route(&mut self, decoded: DecodedHost) {
        match decoded {
            DecodedHost::Message(message) => self.apply(message),
            DecodedHost::Unrecognized { tag } => {
                debug!("Ignoring unrecognized inbound tag: {tag}");
            }
        }
    }

    /// Update state, then fan the matching event out to listeners
    fn apply(&mut self, message: HostMessage) {
        let event = match message {
            HostMessage::Init {
                profile,
                saved_data,
            } => {
                let saved_data = saved_data.and_then(normalize_saved_data);
                self.profile = Some(profile.clone());
                self.saved_data = saved_data.clone();
                BridgeEvent::Init {
                    profile,
                    saved_data,
                }
            }
            HostMessage::LoadProgress { data } => {
                let data = normalize_saved_data(data);
                self.saved_data = data.clone();
                BridgeEvent::LoadProgress { data }
            }
            HostMessage::Pause => {
                self.paused = true;
                BridgeEvent::Pause
            }
            HostMessage::Resume => {
                self.paused = false;
                BridgeEvent::Resume
            }
            HostMessage::SaveConfirmed { success } => BridgeEvent::SaveConfirmed { success },
        };

        self.listeners.emit(&event);
    }

    // === Listener registration ===

    /// Register a listener for one event kind
    pub fn on(&mut self, kind: EventKind, callback: Callback) -> ListenerId {
        self.listeners.on(kind, callback)
    }

    /// Remove a previously registered listener; unknown ids are a no-op
    pub fn off(&mut self, kind: EventKind, id: ListenerId) {
        self.listeners.off(kind, id);
    }

    // === Accessors ===

    /// Profile from the most recent INIT, if any arrived yet
    pub fn child_profile(&self) -> Option<&ChildProfile> {
        self.profile.as_ref()
    }

    /// Most recently received saved progress, if any
    pub fn saved_data(&self) -> Option<&str> {
        self.saved_data.as_deref()
    }

    /// Whether the shell currently has the game paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether a shell transport is attached
    pub fn is_in_app(&self) -> bool {
        self.transport.is_some()
    }
}
