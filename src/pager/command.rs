//! # Command Interpreter
//!
//! Maps single keystrokes from the controlling terminal to pager commands.
//!
//! | Key            | Command      |
//! |----------------|--------------|
//! | `q`            | Quit         |
//! | space          | NextPage     |
//! | Enter          | ToggleScroll |
//! | `f`            | Faster       |
//! | `s`            | Slower       |
//! | Ctrl+C, Ctrl+D | Quit         |
//! | end-of-input   | Quit         |
//!
//! Anything else is ignored and the session keeps waiting.

use crate::io::EventStream;
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Quit,
    NextPage,
    ToggleScroll,
    Faster,
    Slower,
}

impl Command {
    /// Map a raw input byte as it arrives from a non-canonical terminal
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'q' => Some(Command::Quit),
            b' ' => Some(Command::NextPage),
            b'\n' | b'\r' => Some(Command::ToggleScroll),
            b'f' => Some(Command::Faster),
            b's' => Some(Command::Slower),
            // ETX (Ctrl+C) and EOT (Ctrl+D) reach us as bytes in raw mode
            0x03 | 0x04 => Some(Command::Quit),
            _ => None,
        }
    }

    /// Map a decoded key press. Releases and repeats are not commands.
    pub fn from_key_event(key: &KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('d') => Some(Command::Quit),
                _ => None,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return None;
        }

        match key.code {
            KeyCode::Enter => Some(Command::ToggleScroll),
            KeyCode::Char(ch) if ch.is_ascii() => Command::from_byte(ch as u8),
            _ => None,
        }
    }

    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key_event(key),
            _ => None,
        }
    }
}

/// Wait up to `timeout` for one keystroke and interpret it.
///
/// Returns `Ok(None)` when nothing arrived in time or the keystroke has no
/// meaning. An input source that has reached end-of-input yields `Quit`.
pub fn read_command<ES: EventStream + ?Sized>(
    events: &mut ES,
    timeout: Duration,
) -> Result<Option<Command>> {
    if events.poll(timeout)? {
        let event = events.read()?;
        let command = Command::from_event(&event);
        match command {
            Some(command) => tracing::debug!("Key {:?} -> {:?}", event, command),
            None => tracing::trace!("Ignoring event {:?}", event),
        }
        return Ok(command);
    }

    if events.is_exhausted() {
        tracing::debug!("Input exhausted, treating as quit");
        return Ok(Some(Command::Quit));
    }

    Ok(None)
}
