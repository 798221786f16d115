//! # I/O Abstraction Layer
//!
//! Provides clean trait abstractions for input/output streams so the paging
//! session can be driven without a real terminal.
//!
//! ## Design Principles
//!
//! - **EventStream**: Abstracts keystroke input from the controlling terminal
//! - **RenderStream**: Abstracts append-only output, raw mode and window size
//! - **Clean Separation**: All terminal-specific code isolated to implementations
//!
//! ## Architecture
//!
//! ```text
//! Production:  PagerSession ──▶ TerminalEventStream ──▶ crossterm::event::poll/read()
//!                           ──▶ TerminalRenderStream ──▶ stdout (LF -> CRLF)
//!
//! Testing:     PagerSession ──▶ MockEventStream     ──▶ scripted keys + pauses
//!                           ──▶ MockRenderStream    ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

// Re-export terminal implementations for convenience
pub use terminal::{TerminalEventStream, TerminalRenderStream};

// Re-export mock implementations for testing
pub use mock::{MockEventStream, MockRenderStream, RenderCommand, ScriptStep};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
///
/// Production reads keystrokes from the controlling terminal, which is not
/// necessarily standard input. Test implementations replay a script.
pub trait EventStream: Send {
    /// Check if events are available without blocking longer than `timeout`
    ///
    /// Returns true if an event is ready to be read.
    /// This is equivalent to crossterm::event::poll().
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event
    ///
    /// This should only be called after poll() returns true.
    fn read(&mut self) -> Result<Event>;

    /// True when no further input will ever arrive (end-of-input)
    ///
    /// A terminal is never exhausted.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Output render stream abstraction
///
/// Output is append-only text. The only terminal state the pager touches is
/// the input mode, plus a one-time window size query.
pub trait RenderStream: Write + Send {
    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    /// Switch keyboard input to unbuffered, no-echo mode
    fn enable_raw_mode(&mut self) -> Result<()>;

    /// Restore the terminal input mode saved by enable_raw_mode
    fn disable_raw_mode(&mut self) -> Result<()>;
}
