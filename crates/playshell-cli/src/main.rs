//! playshell-stdio: stdio harness for the game bridge
//!
//! Plays the part of an embedded game: shell messages arrive as JSON lines
//! on stdin, outbound envelopes leave as JSON lines on stdout. Useful for
//! poking at the bridge from a terminal or a scripted shell simulator.

use anyhow::Result;
use playshell_bridge::{BridgeEvent, EventKind, GameBridge, WriterTransport};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the wire
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let mut bridge = GameBridge::new(WriterTransport::new(std::io::stdout()));

    for kind in [
        EventKind::Init,
        EventKind::LoadProgress,
        EventKind::Pause,
        EventKind::Resume,
        EventKind::SaveConfirmed,
    ] {
        bridge.on(
            kind,
            Box::new(move |event: &BridgeEvent| {
                info!("[shell->game] {event:?}");
                Ok(())
            }),
        );
    }

    bridge.ready();
    info!("Bridge ready, reading shell messages from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        bridge.handle_text(line);
    }

    warn!("stdin closed, shutting down");
    bridge.exit_game();
    Ok(())
}
