//! # Screen Geometry
//!
//! Terminal dimensions captured once at startup. The last row is reserved
//! for the status prompt, so a page is one row shorter than the screen.

/// Fixed terminal dimensions for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenGeometry {
    rows: usize,
    cols: usize,
}

impl ScreenGeometry {
    /// Smallest usable height: one page row plus the prompt row
    pub const MIN_ROWS: usize = 2;
    pub const MIN_COLS: usize = 1;

    /// Create geometry from a measured size, clamping degenerate values so a
    /// page always holds at least one line
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows < Self::MIN_ROWS || cols < Self::MIN_COLS {
            tracing::warn!(
                "Terminal size {}x{} is too small, clamping to at least {}x{}",
                cols,
                rows,
                Self::MIN_COLS,
                Self::MIN_ROWS
            );
        }
        Self {
            rows: rows.max(Self::MIN_ROWS),
            cols: cols.max(Self::MIN_COLS),
        }
    }

    /// Build from crossterm's `(columns, rows)` ordering
    pub fn from_terminal_size((cols, rows): (u16, u16)) -> Self {
        Self::new(usize::from(rows), usize::from(cols))
    }

    pub const fn rows(self) -> usize {
        self.rows
    }

    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Lines per page; never less than one
    pub const fn page_length(self) -> usize {
        self.rows - 1
    }
}
