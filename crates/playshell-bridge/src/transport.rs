//! Transport abstractions for the shell boundary
//!
//! The shell provides a single string channel; everything here is a thin
//! wrapper that moves one serialized envelope across it. Sends are
//! synchronous and fire-and-forget: the bridge never waits for an answer
//! on the same call; any reply arrives later as an inbound message.

use playshell_core::{BridgeError, Result};
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// A one-way string channel into the host shell
pub trait Transport {
    /// Deliver one serialized envelope
    fn send(&mut self, line: &str) -> Result<()>;
}

/// Newline-delimited JSON over any writer
///
/// Used by the stdio harness (stdout) and by tests over in-memory buffers.
pub struct WriterTransport<W: Write> {
    writer: W,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn send(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| BridgeError::Transport(format!("Write failed: {e}")))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| BridgeError::Transport(format!("Write failed: {e}")))?;
        self.writer
            .flush()
            .map_err(|e| BridgeError::Transport(format!("Flush failed: {e}")))?;
        Ok(())
    }
}

/// Captures sent envelopes for inspection
///
/// Clones share the same buffer, so a harness can keep one clone and hand
/// the other to the bridge.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    sent: Rc<RefCell<Vec<String>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, oldest first
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl Transport for MemoryTransport {
    fn send(&mut self, line: &str) -> Result<()> {
        self.sent.borrow_mut().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_transport_appends_newline() {
        let mut buf = Vec::new();
        {
            let mut transport = WriterTransport::new(&mut buf);
            transport.send(r#"{"type":"READY"}"#).unwrap();
            transport.send(r#"{"type":"EXIT"}"#).unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"type\":\"READY\"}\n{\"type\":\"EXIT\"}\n"
        );
    }

    #[test]
    fn test_memory_transport_shares_buffer_across_clones() {
        let capture = MemoryTransport::new();
        let mut sender = capture.clone();
        sender.send("one").unwrap();
        sender.send("two").unwrap();
        assert_eq!(capture.sent(), vec!["one", "two"]);
    }
}
