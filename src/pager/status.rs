//! # Status Prompt
//!
//! The reverse-video indicator on the last screen row: ` more? ` while there
//! is content left, ` done! ` once the document is exhausted. Both labels are
//! the same width, so erasing is a fixed backspace / blank / backspace run.

use super::ansi_escape_codes::{BACKSPACE, RESET, REVERSE};
use std::io::{self, Write};

const MORE_LABEL: &str = " more? ";
const DONE_LABEL: &str = " done! ";
const LABEL_WIDTH: usize = MORE_LABEL.len();

/// Which label the prompt shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    More,
    Done,
}

impl PromptKind {
    pub fn for_exhausted(exhausted: bool) -> Self {
        if exhausted {
            PromptKind::Done
        } else {
            PromptKind::More
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PromptKind::More => MORE_LABEL,
            PromptKind::Done => DONE_LABEL,
        }
    }
}

/// Bytes that draw the highlighted label
pub fn render_prompt(kind: PromptKind) -> String {
    format!("{REVERSE}{}{RESET}", kind.label())
}

/// Bytes that blank out a drawn label and leave the cursor where it started
pub fn erase_sequence() -> String {
    let back = BACKSPACE.repeat(LABEL_WIDTH);
    format!("{back}{}{back}", " ".repeat(LABEL_WIDTH))
}

/// Tracks whether the prompt is currently on screen so it is drawn and
/// erased exactly once per appearance
#[derive(Debug, Default)]
pub struct StatusPrompt {
    shown: Option<PromptKind>,
}

impl StatusPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label currently on screen, if any
    pub fn shown(&self) -> Option<PromptKind> {
        self.shown
    }

    pub fn is_visible(&self) -> bool {
        self.shown.is_some()
    }

    /// Draw the prompt, replacing whatever label is already showing
    pub fn show<W: Write + ?Sized>(&mut self, out: &mut W, kind: PromptKind) -> io::Result<()> {
        if self.shown == Some(kind) {
            return Ok(());
        }
        self.erase(out)?;
        out.write_all(render_prompt(kind).as_bytes())?;
        out.flush()?;
        self.shown = Some(kind);
        Ok(())
    }

    /// Remove the prompt if it is showing
    pub fn erase<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        if self.shown.take().is_some() {
            out.write_all(erase_sequence().as_bytes())?;
        }
        Ok(())
    }
}
