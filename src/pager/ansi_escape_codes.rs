//! ANSI escape code constants used by the status prompt
//!
//! Only the sequences the pager actually emits are listed here. The prompt is
//! drawn with plain append-only output, so no cursor addressing is needed.

pub const RESET: &str = "\x1b[m"; // Reset all attributes
pub const REVERSE: &str = "\x1b[7m"; // Reverse video (swap fg/bg)
pub const BACKSPACE: &str = "\x08"; // Move cursor one column left
