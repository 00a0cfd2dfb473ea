//! Fixed-interval scheduler for the main loop.
//!
//! The ticker never catches up: when a poll comes in late, the next interval
//! starts from that poll, so a slow frame delays the following tick instead
//! of queueing extra ones.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// Time left until the next tick is due (zero when already due).
    pub fn timeout(&self, now: Instant) -> Duration {
        self.interval
            .checked_sub(now.saturating_duration_since(self.last))
            .unwrap_or(Duration::ZERO)
    }

    /// Returns true when a tick is due and restarts the interval at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) < self.interval {
            return false;
        }
        self.last = now;
        true
    }
}
