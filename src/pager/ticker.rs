//! # Auto-Scroll Ticker
//!
//! A deadline-based periodic timer with two states. Nothing fires on its own:
//! the session loop asks how long until the next tick, waits on the keyboard
//! for at most that long, and then calls [`Ticker::fire_if_due`]. Ticks are
//! therefore only ever handled between complete operations.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Disarmed,
    Armed { period: Duration, next_due: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    state: TickerState,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            state: TickerState::Disarmed,
        }
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, TickerState::Armed { .. })
    }

    /// Current period, if armed
    pub fn period(&self) -> Option<Duration> {
        match self.state {
            TickerState::Armed { period, .. } => Some(period),
            TickerState::Disarmed => None,
        }
    }

    /// Start ticking; the first tick is one full period from `now`
    pub fn arm(&mut self, period: Duration, now: Instant) {
        let period = period.max(Duration::from_millis(1));
        tracing::debug!("Ticker armed at {:?}", period);
        self.state = TickerState::Armed {
            period,
            next_due: now + period,
        };
    }

    pub fn disarm(&mut self) {
        if self.is_armed() {
            tracing::debug!("Ticker disarmed");
        }
        self.state = TickerState::Disarmed;
    }

    /// Apply a new period immediately if armed; a disarmed ticker stays disarmed
    pub fn rearm(&mut self, period: Duration, now: Instant) {
        if self.is_armed() {
            self.arm(period, now);
        }
    }

    /// Time left before the next tick, zero if one is overdue
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TickerState::Armed { next_due, .. } => Some(next_due.saturating_duration_since(now)),
            TickerState::Disarmed => None,
        }
    }

    /// Consume one due tick, scheduling the following one.
    ///
    /// The next deadline keeps the original cadence unless the loop fell a
    /// whole period behind, in which case it restarts from `now` instead of
    /// firing a burst of catch-up ticks.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.state {
            TickerState::Armed { period, next_due } if now >= next_due => {
                let mut following = next_due + period;
                if following <= now {
                    following = now + period;
                }
                self.state = TickerState::Armed {
                    period,
                    next_due: following,
                };
                true
            }
            _ => false,
        }
    }
}
