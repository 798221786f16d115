//! # Pagination Engine
//!
//! Everything between "file loaded into memory" and "bytes on the terminal":
//! the document cursor, line filling, page printing, the status prompt, the
//! keystroke commands, the auto-scroll ticker and the session loop that
//! multiplexes keystrokes with ticks.

pub mod ansi_escape_codes;
pub mod clock;
pub mod command;
pub mod document;
pub mod engine;
pub mod geometry;
pub mod scroll;
pub mod session;
pub mod status;
pub mod ticker;

// Re-export core types
pub use clock::{Clock, SharedClock, SystemClock, TestClock};
pub use command::{read_command, Command};
pub use document::{fill_line, Document, FilledLine};
pub use engine::PaginationEngine;
pub use geometry::ScreenGeometry;
pub use scroll::ScrollDelay;
pub use session::{PagerSession, SessionExit, SessionState};
pub use status::{PromptKind, StatusPrompt};
pub use ticker::{Ticker, TickerState};
