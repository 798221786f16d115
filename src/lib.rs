//! # scrollmore - Terminal Pager with Timed Auto-Scroll
//!
//! Shows a text file one screenful at a time. Keys: space for the next page,
//! Enter to start or stop auto-scroll, `f`/`s` to scroll faster or slower,
//! `q` to quit.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  keystrokes  ┌──────────────┐  lines   ┌──────────────────┐
//! │ EventStream  │─────────────▶│ PagerSession │─────────▶│ PaginationEngine │
//! │ (terminal)   │              │ - commands   │          │ - Document       │
//! └──────────────┘              │ - Ticker     │          │ - line filling   │
//!                               └──────┬───────┘          │ - status prompt  │
//!                                      │ raw mode         └────────┬─────────┘
//!                                      ▼                           │ bytes
//!                               ┌──────────────┐                   │
//!                               │ RenderStream │◀──────────────────┘
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod io;
pub mod pager;
pub mod signals;

// Re-export main types for easy access
pub use config::PagerConfig;
pub use error::PagerError;
pub use pager::*;
pub use signals::InterruptFlag;
