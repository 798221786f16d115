//! Startup errors
//!
//! Failures that can happen before the session loop begins. Any of them ends
//! the process with a diagnostic on stderr and exit code 1.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PagerError {
    /// No controlling terminal to read keystrokes from
    #[error("cannot open the controlling terminal: {source}")]
    TerminalUnavailable {
        #[source]
        source: io::Error,
    },

    #[error("there was an error opening the file '{}': {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file opened but could not be read to the end
    #[error("error reading file '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot query the terminal window size: {source}")]
    WindowSize {
        #[source]
        source: io::Error,
    },
}
