//! Auto-advance schedule for the slider.
//!
//! Cooperative and deadline-based: the owner polls with the current time
//! and advances the slider when the deadline has passed. Every manual
//! navigation restarts the schedule, so a stale deadline never races a
//! fresh slide index.

use std::time::{Duration, Instant};

/// Default interval between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// A restartable fixed-interval deadline.
#[derive(Clone, Debug)]
pub struct Autoplay {
    interval: Duration,
    deadline: Instant,
}

impl Autoplay {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            deadline: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancel the pending deadline and schedule a fresh one.
    pub fn restart(&mut self, now: Instant) {
        self.deadline = now + self.interval;
    }

    /// Whether the deadline has passed. When it has, the next one is
    /// scheduled and the caller should advance the slider.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + self.interval;
        true
    }
}
