//! # Scroll Delay
//!
//! The auto-scroll period. `f` shortens it to four fifths, `s` stretches it
//! to six fifths, with truncating integer arithmetic, and the result is
//! clamped to the configured range. The two steps are not inverses of each
//! other: 2000 ms -> faster -> 1600 ms -> slower -> 1920 ms.

use crate::config::PagerConfig;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDelay {
    millis: u64,
    min_ms: u64,
    max_ms: u64,
}

impl ScrollDelay {
    pub fn new(millis: u64, min_ms: u64, max_ms: u64) -> Self {
        let min_ms = min_ms.max(1);
        let max_ms = max_ms.max(min_ms);
        Self {
            millis: millis.clamp(min_ms, max_ms),
            min_ms,
            max_ms,
        }
    }

    pub fn from_config(config: &PagerConfig) -> Self {
        Self::new(
            config.initial_delay_ms,
            config.min_delay_ms,
            config.max_delay_ms,
        )
    }

    pub fn as_millis(&self) -> u64 {
        self.millis
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }

    /// Shorten the period to 80%
    pub fn faster(&mut self) -> u64 {
        self.set(self.millis * 4 / 5)
    }

    /// Stretch the period to 120%
    pub fn slower(&mut self) -> u64 {
        self.set(self.millis.saturating_mul(6) / 5)
    }

    fn set(&mut self, millis: u64) -> u64 {
        self.millis = millis.clamp(self.min_ms, self.max_ms);
        self.millis
    }
}

impl Default for ScrollDelay {
    fn default() -> Self {
        Self::from_config(&PagerConfig::default())
    }
}
