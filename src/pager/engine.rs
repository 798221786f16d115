//! # Pagination Engine
//!
//! Prints the document a page or a single line at a time, and keeps the
//! status prompt in step with what has been printed. The engine owns the
//! document cursor, so the manual page path and the auto-scroll path advance
//! the same state through `&mut self` and can never overlap.

use super::document::Document;
use super::geometry::ScreenGeometry;
use super::status::{PromptKind, StatusPrompt};
use std::io::{self, Write};

#[derive(Debug)]
pub struct PaginationEngine {
    document: Document,
    geometry: ScreenGeometry,
    remaining_lines_in_page: usize,
    prompt: StatusPrompt,
}

impl PaginationEngine {
    pub fn new(document: Document, geometry: ScreenGeometry) -> Self {
        Self {
            document,
            geometry,
            remaining_lines_in_page: 0,
            prompt: StatusPrompt::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    pub fn is_exhausted(&self) -> bool {
        self.document.is_exhausted()
    }

    /// Lines still owed to the page currently being printed
    pub fn remaining_lines_in_page(&self) -> usize {
        self.remaining_lines_in_page
    }

    pub fn prompt(&self) -> Option<PromptKind> {
        self.prompt.shown()
    }

    /// Print up to one page of lines, then show the prompt.
    ///
    /// Returns the number of lines written, which is less than the page length
    /// only when the document runs out.
    pub fn print_page<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<usize> {
        self.prompt.erase(out)?;

        self.remaining_lines_in_page = self.geometry.page_length();
        let mut printed = 0;
        while self.remaining_lines_in_page > 0 {
            if !self.emit_line(out)? {
                break;
            }
            self.remaining_lines_in_page -= 1;
            printed += 1;
        }

        tracing::debug!(
            "Printed page of {} lines, cursor at {}/{}",
            printed,
            self.document.cursor(),
            self.document.len()
        );
        self.show_prompt(out)?;
        Ok(printed)
    }

    /// Print exactly one more line for auto-scroll, then show the prompt.
    ///
    /// Returns false without writing a line when the document is exhausted.
    /// The page counter is left alone.
    pub fn print_one_line<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<bool> {
        if self.is_exhausted() {
            self.show_prompt(out)?;
            return Ok(false);
        }
        self.prompt.erase(out)?;
        let printed = self.emit_line(out)?;
        self.show_prompt(out)?;
        Ok(printed)
    }

    /// Draw the prompt that matches the current cursor position
    pub fn show_prompt<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        let kind = PromptKind::for_exhausted(self.is_exhausted());
        self.prompt.show(out, kind)
    }

    pub fn erase_prompt<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        self.prompt.erase(out)?;
        out.flush()
    }

    fn emit_line<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<bool> {
        let cols = self.geometry.cols();
        match self.document.next_line(cols) {
            Some(line) => {
                line.write_to(out)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::status::{erase_sequence, render_prompt};

    fn engine(text: &str, rows: usize, cols: usize) -> PaginationEngine {
        PaginationEngine::new(Document::from_bytes(text), ScreenGeometry::new(rows, cols))
    }

    fn more() -> String {
        render_prompt(PromptKind::More)
    }

    fn done() -> String {
        render_prompt(PromptKind::Done)
    }

    #[test]
    fn first_page_stops_at_page_length() {
        let mut engine = engine("line one\nline two\nline three\n", 3, 40);
        let mut out = Vec::new();

        let printed = engine.print_page(&mut out).unwrap();

        assert_eq!(printed, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("line one\nline two\n{}", more())
        );
        assert_eq!(engine.prompt(), Some(PromptKind::More));
        assert_eq!(engine.remaining_lines_in_page(), 0);
    }

    #[test]
    fn last_page_stops_at_exhaustion() {
        let mut engine = engine("line one\nline two\nline three\n", 3, 40);
        let mut out = Vec::new();
        engine.print_page(&mut out).unwrap();
        out.clear();

        let printed = engine.print_page(&mut out).unwrap();

        assert_eq!(printed, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}line three\n{}", erase_sequence(), done())
        );
        assert!(engine.is_exhausted());
        assert_eq!(engine.remaining_lines_in_page(), 1);
    }

    #[test]
    fn forced_wrap_on_single_row_page() {
        let text = "a".repeat(100);
        let mut engine = engine(&text, 2, 10);
        let mut out = Vec::new();

        engine.print_page(&mut out).unwrap();

        assert_eq!(engine.document().cursor(), 10);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("aaaaaaaaaa\n{}", more())
        );
    }

    #[test]
    fn print_one_line_leaves_page_counter_alone() {
        let mut engine = engine("1\n2\n3\n4\n", 3, 40);
        let mut out = Vec::new();
        engine.print_page(&mut out).unwrap();
        out.clear();

        assert!(engine.print_one_line(&mut out).unwrap());

        assert_eq!(engine.remaining_lines_in_page(), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}3\n{}", erase_sequence(), more())
        );
    }

    #[test]
    fn print_one_line_when_exhausted_writes_nothing_new() {
        let mut engine = engine("only\n", 3, 40);
        let mut out = Vec::new();
        engine.print_page(&mut out).unwrap();
        out.clear();

        assert!(!engine.print_one_line(&mut out).unwrap());
        assert!(out.is_empty());
        assert_eq!(engine.prompt(), Some(PromptKind::Done));
    }

    #[test]
    fn page_after_exhaustion_prints_no_lines() {
        let mut engine = engine("only\n", 3, 40);
        let mut out = Vec::new();
        engine.print_page(&mut out).unwrap();
        out.clear();

        assert_eq!(engine.print_page(&mut out).unwrap(), 0);
        let shown = String::from_utf8(out).unwrap();
        assert_eq!(shown, format!("{}{}", erase_sequence(), done()));
    }

    #[test]
    fn erase_prompt_clears_visible_prompt() {
        let mut engine = engine("a\nb\nc\n", 2, 40);
        let mut out = Vec::new();
        engine.print_page(&mut out).unwrap();
        out.clear();

        engine.erase_prompt(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), erase_sequence());
        assert_eq!(engine.prompt(), None);
    }

    #[test]
    fn empty_document_shows_done_immediately() {
        let mut engine = engine("", 5, 40);
        let mut out = Vec::new();

        assert_eq!(engine.print_page(&mut out).unwrap(), 0);
        assert_eq!(String::from_utf8(out).unwrap(), done());
    }
}
