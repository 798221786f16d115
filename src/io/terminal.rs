//! # Terminal I/O Implementations
//!
//! Production implementations of I/O abstractions using crossterm.
//! All crossterm terminal calls are isolated to this module.

use super::{EventStream, RenderStream, TerminalSize};
use crate::error::PagerError;
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal;
use std::io::{self, Write};
use std::time::Duration;

/// Path of the controlling terminal on Unix systems
#[cfg(unix)]
pub const CONTROLLING_TTY: &str = "/dev/tty";

/// Terminal-based event stream using crossterm
///
/// crossterm reads from the controlling terminal when standard input is
/// redirected, so keystrokes never come from the paged file.
pub struct TerminalEventStream;

impl TerminalEventStream {
    /// Open the keystroke source, failing if there is no controlling terminal
    pub fn open() -> Result<Self, PagerError> {
        Self::ensure_controlling_terminal()?;
        Ok(Self)
    }

    #[cfg(unix)]
    fn ensure_controlling_terminal() -> Result<(), PagerError> {
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(CONTROLLING_TTY)
            .map(drop)
            .map_err(|source| PagerError::TerminalUnavailable { source })
    }

    #[cfg(not(unix))]
    fn ensure_controlling_terminal() -> Result<(), PagerError> {
        terminal::size()
            .map(drop)
            .map_err(|source| PagerError::TerminalUnavailable { source })
    }
}

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).map_err(anyhow::Error::from)
    }

    fn read(&mut self) -> Result<Event> {
        event::read().map_err(anyhow::Error::from)
    }
}

/// Terminal-based render stream
///
/// Raw mode turns off output post-processing, so a bare line feed would no
/// longer return the carriage. Every `\n` written is sent as `\r\n`.
pub struct TerminalRenderStream<W: Write> {
    writer: W,
}

impl TerminalRenderStream<io::Stdout> {
    /// Create a new terminal render stream using stdout
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> TerminalRenderStream<W> {
    /// Create a terminal render stream with custom writer
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Write for TerminalRenderStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for (index, chunk) in buf.split(|&b| b == b'\n').enumerate() {
            if index > 0 {
                self.writer.write_all(b"\r\n")?;
            }
            self.writer.write_all(chunk)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl<W: Write + Send> RenderStream for TerminalRenderStream<W> {
    fn get_size(&self) -> Result<TerminalSize> {
        terminal::size().map_err(|source| PagerError::WindowSize { source }.into())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        terminal::enable_raw_mode().map_err(anyhow::Error::from)
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        terminal::disable_raw_mode().map_err(anyhow::Error::from)
    }
}

impl Default for TerminalRenderStream<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}
