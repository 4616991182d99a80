// SPDX-License-Identifier: MPL-2.0
//! Cancellable scheduled-task handles owned by a rotation.
//!
//! The handles are plain data: a deadline or a start timestamp.
//! The host supplies the clock and the wake-ups; cancelling a task means
//! dropping its handle, so a late wake-up finds nothing to run.

use crate::domain::slider::AutoplayDelay;
use std::time::{Duration, Instant};

/// A timer that fires every `period`, starting one period after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTask {
    period: Duration,
    next_due: Instant,
}

impl RepeatingTask {
    #[must_use]
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    /// When the timer fires next.
    #[must_use]
    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Consumes the pending firing and schedules the following one.
    ///
    /// Returns the instant the consumed firing was due at.
    pub fn fire(&mut self) -> Instant {
        let due = self.next_due;
        self.next_due = due + self.period;
        due
    }
}

/// A one-shot deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneShotTask {
    due: Instant,
}

impl OneShotTask {
    #[must_use]
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self { due: now + delay }
    }

    #[must_use]
    pub fn due(&self) -> Instant {
        self.due
    }
}

/// A per-frame refresh chain for the autoplay progress indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTask {
    started_at: Instant,
}

impl FrameTask {
    #[must_use]
    pub fn new(started_at: Instant) -> Self {
        Self { started_at }
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Fill fraction at `now`: `min((now - start) / delay, 1)`.
    #[must_use]
    pub fn fraction(&self, now: Instant, delay: AutoplayDelay) -> f32 {
        delay.fraction_of(now.saturating_duration_since(self.started_at))
    }
}
