//! Message channel to the game engine.
//!
//! The engine speaks one JSON value per line. `TurnLoop` only sees the
//! [`Transport`] trait, so tests can drive it from memory.

use std::io::{BufRead, Write};

use serde_json::Value;

use tankbot_core::commands::ActionSet;
use tankbot_core::AgentError;

/// Blocking, ordered, request/response channel to the engine.
pub trait Transport {
    /// Block until the next message arrives.
    fn read_message(&mut self) -> Result<Value, AgentError>;

    /// Send one action set.
    fn post_message(&mut self, actions: &ActionSet) -> Result<(), AgentError>;
}

/// Line-oriented JSON transport over any reader/writer pair (stdin/stdout
/// in production).
pub struct LineTransport<R, W> {
    reader: R,
    writer: W,
    line: String,
}

impl<R: BufRead, W: Write> LineTransport<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            line: String::new(),
        }
    }

    /// Give back the writer, e.g. to inspect what was sent.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Transport for LineTransport<R, W> {
    fn read_message(&mut self) -> Result<Value, AgentError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(AgentError::TransportClosed);
            }
            let text = self.line.trim();
            if text.is_empty() {
                continue;
            }
            // Bare tokens (sentinels written without quotes) become strings;
            // anything else that is not JSON fails later as a protocol error.
            let value =
                serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()));
            return Ok(value);
        }
    }

    fn post_message(&mut self, actions: &ActionSet) -> Result<(), AgentError> {
        serde_json::to_writer(&mut self.writer, actions)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
