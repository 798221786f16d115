//! # Document Buffer
//!
//! Owns the complete file contents and the read cursor that marks the next
//! unread byte. Display lines are carved off the front of the unread region
//! by [`fill_line`], one screen row at a time.
//!
//! The cursor only ever moves forward and never passes the end of the
//! contents. Once it reaches the end the document is exhausted.

use crate::error::PagerError;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// One display line cut from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledLine<'a> {
    /// Bytes taken from the document, including a natural newline if one was found
    pub text: &'a [u8],
    /// True when the line hit the screen width before a newline
    pub forced_wrap: bool,
    /// Cursor position just past `text`
    pub next_cursor: usize,
}

impl FilledLine<'_> {
    /// Number of document bytes this line consumed
    pub fn consumed(&self) -> usize {
        self.text.len()
    }

    /// Write the line as it appears on screen, appending the newline for a forced wrap
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.text)?;
        if self.forced_wrap {
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// The on-screen bytes as an owned buffer
    pub fn to_display_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.text.len() + 1);
        bytes.extend_from_slice(self.text);
        if self.forced_wrap {
            bytes.push(b'\n');
        }
        bytes
    }
}

/// Extract one display line of at most `cols` bytes starting at `cursor`.
///
/// Returns `None` when `cursor` is at or past the end of `text`. Otherwise the
/// returned line always consumes at least one byte and at most `cols` bytes.
pub fn fill_line(text: &[u8], cursor: usize, cols: usize) -> Option<FilledLine<'_>> {
    let rest = text.get(cursor..).filter(|rest| !rest.is_empty())?;
    let span = &rest[..rest.len().min(cols.max(1))];

    match span.iter().position(|&b| b == b'\n') {
        Some(newline) => Some(FilledLine {
            text: &span[..=newline],
            forced_wrap: false,
            next_cursor: cursor + newline + 1,
        }),
        None => Some(FilledLine {
            text: span,
            forced_wrap: true,
            next_cursor: cursor + span.len(),
        }),
    }
}

/// Immutable file contents plus a forward-only cursor
#[derive(Debug, Clone, Default)]
pub struct Document {
    contents: Vec<u8>,
    cursor: usize,
}

impl Document {
    /// Create a document over in-memory contents with the cursor at the start
    pub fn from_bytes(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: contents.into(),
            cursor: 0,
        }
    }

    /// Read a whole file into memory.
    ///
    /// Open and read failures are reported separately so the diagnostic says
    /// which step went wrong. A partial read is never accepted.
    pub fn open(path: &Path) -> Result<Self, PagerError> {
        let mut file = File::open(path).map_err(|source| PagerError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|source| PagerError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!("Loaded {} bytes from '{}'", contents.len(), path.display());
        Ok(Self::from_bytes(contents))
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every byte has been handed out
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.contents.len()
    }

    /// Bytes not yet displayed
    pub fn remaining(&self) -> &[u8] {
        &self.contents[self.cursor..]
    }

    /// Cut the next display line and advance the cursor past it
    pub fn next_line(&mut self, cols: usize) -> Option<FilledLine<'_>> {
        let line = fill_line(&self.contents, self.cursor, cols)?;
        self.cursor = line.next_cursor;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(text: &[u8], cols: usize) -> (Vec<u8>, usize) {
        let mut out = Vec::new();
        let mut cursor = 0;
        let mut forced = 0;
        while let Some(line) = fill_line(text, cursor, cols) {
            assert!(line.consumed() >= 1);
            assert!(line.consumed() <= cols);
            assert_eq!(line.next_cursor, cursor + line.consumed());
            if line.forced_wrap {
                forced += 1;
            }
            out.extend_from_slice(line.text);
            cursor = line.next_cursor;
        }
        assert_eq!(cursor, text.len());
        (out, forced)
    }

    #[test]
    fn natural_newline_ends_the_line() {
        let text = b"line one\nline two\n";
        let line = fill_line(text, 0, 40).unwrap();
        assert_eq!(line.text, b"line one\n");
        assert!(!line.forced_wrap);
        assert_eq!(line.next_cursor, 9);
    }

    #[test]
    fn long_line_is_force_wrapped_at_width() {
        let text = vec![b'x'; 100];
        let line = fill_line(&text, 0, 10).unwrap();
        assert_eq!(line.text.len(), 10);
        assert!(line.forced_wrap);
        assert_eq!(line.next_cursor, 10);
        assert_eq!(line.to_display_bytes(), b"xxxxxxxxxx\n".to_vec());
    }

    #[test]
    fn newline_exactly_at_width_boundary_is_natural() {
        let text = b"abcd\nefgh";
        let line = fill_line(text, 0, 5).unwrap();
        assert_eq!(line.text, b"abcd\n");
        assert!(!line.forced_wrap);
    }

    #[test]
    fn newline_just_past_width_forces_a_wrap() {
        let text = b"abcde\n";
        let first = fill_line(text, 0, 5).unwrap();
        assert_eq!(first.text, b"abcde");
        assert!(first.forced_wrap);

        // The leftover newline becomes its own (empty) display line
        let second = fill_line(text, first.next_cursor, 5).unwrap();
        assert_eq!(second.text, b"\n");
        assert!(!second.forced_wrap);
        assert_eq!(second.next_cursor, text.len());
    }

    #[test]
    fn tail_without_newline_never_reads_past_end() {
        let text = b"abc\nxy";
        let first = fill_line(text, 0, 10).unwrap();
        let second = fill_line(text, first.next_cursor, 10).unwrap();
        assert_eq!(second.text, b"xy");
        assert!(second.forced_wrap);
        assert_eq!(second.next_cursor, text.len());
        assert!(fill_line(text, second.next_cursor, 10).is_none());
    }

    #[test]
    fn cursor_at_or_past_end_yields_nothing() {
        assert!(fill_line(b"", 0, 10).is_none());
        assert!(fill_line(b"abc", 3, 10).is_none());
        assert!(fill_line(b"abc", 99, 10).is_none());
    }

    #[test]
    fn zero_width_still_advances() {
        let line = fill_line(b"abc", 0, 0).unwrap();
        assert_eq!(line.consumed(), 1);
    }

    #[test]
    fn reassembly_reproduces_the_source_bytes() {
        let text = b"short\na much longer line that will need wrapping\n\nlast";
        for cols in [1, 3, 7, 16, 80] {
            let (out, _) = reassemble(text, cols);
            assert_eq!(out, text.to_vec(), "cols = {cols}");
        }
    }

    #[test]
    fn forced_wraps_are_the_only_inserted_newlines() {
        let text = b"0123456789abcdef\nxyz\n";
        let mut displayed = Vec::new();
        let mut cursor = 0;
        let mut forced = 0;
        while let Some(line) = fill_line(text, cursor, 6) {
            displayed.extend(line.to_display_bytes());
            forced += usize::from(line.forced_wrap);
            cursor = line.next_cursor;
        }
        let source_newlines = text.iter().filter(|&&b| b == b'\n').count();
        let shown_newlines = displayed.iter().filter(|&&b| b == b'\n').count();
        assert_eq!(shown_newlines, source_newlines + forced);
        assert_eq!(forced, 2);
    }

    #[test]
    fn document_cursor_is_monotonic_and_bounded() {
        let mut doc = Document::from_bytes("line one\nline two\nline three\n");
        let mut last = doc.cursor();
        while let Some(line) = doc.next_line(4) {
            assert!(line.next_cursor > last);
            last = line.next_cursor;
        }
        assert_eq!(doc.cursor(), doc.len());
        assert!(doc.is_exhausted());
        assert!(doc.next_line(4).is_none());
        assert_eq!(doc.cursor(), doc.len());
    }

    #[test]
    fn empty_document_starts_exhausted() {
        let doc = Document::from_bytes(Vec::new());
        assert!(doc.is_empty());
        assert!(doc.is_exhausted());
        assert!(doc.remaining().is_empty());
    }

    #[test]
    fn open_reads_the_whole_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"alpha\nbeta\n")?;

        let doc = Document::open(file.path())?;
        assert_eq!(doc.len(), 11);
        assert_eq!(doc.remaining(), b"alpha\nbeta\n");
        Ok(())
    }

    #[test]
    fn open_missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let err = Document::open(&missing).unwrap_err();
        assert!(matches!(err, PagerError::OpenFile { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn directory_is_a_read_error_after_open() {
        // Opening a directory succeeds on Unix; reading it fails
        let dir = tempfile::tempdir().unwrap();

        let err = Document::open(dir.path()).unwrap_err();
        assert!(matches!(err, PagerError::ReadFile { .. }));
    }
}
