//! Configuration constants and utilities for scrollmore
//!
//! There is no configuration file. Tuning knobs live in [`PagerConfig`] with
//! fixed defaults, and the only environment variable read is the log level.

use std::time::Duration;

/// Auto-scroll period used until the user presses `f` or `s`
pub const DEFAULT_SCROLL_DELAY_MS: u64 = 2000;

/// Lower bound for the auto-scroll period after repeated `f` presses
pub const MIN_SCROLL_DELAY_MS: u64 = 50;

/// Upper bound for the auto-scroll period after repeated `s` presses
pub const MAX_SCROLL_DELAY_MS: u64 = 60_000;

/// Longest single wait on the keyboard before the session loop re-checks
/// for interrupts and due ticks
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Environment variable name for the tracing filter
pub const LOG_LEVEL_ENV_VAR: &str = "SCROLLMORE_LOG_LEVEL";

/// Tuning knobs for a paging session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    pub initial_delay_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub poll_interval: Duration,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            min_delay_ms: MIN_SCROLL_DELAY_MS,
            max_delay_ms: MAX_SCROLL_DELAY_MS,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }
}

impl PagerConfig {
    /// Override the starting auto-scroll period
    pub fn with_initial_delay_ms(mut self, delay_ms: u64) -> Self {
        self.initial_delay_ms = delay_ms;
        self
    }

    /// Override how long a single keyboard poll may block
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

/// Get the log filter directive from the environment, if one is set
pub fn get_log_level() -> Option<String> {
    std::env::var_os(LOG_LEVEL_ENV_VAR).and_then(|val| val.into_string().ok())
}
