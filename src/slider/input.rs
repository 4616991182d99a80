// SPDX-License-Identifier: MPL-2.0
//! Navigation direction and swipe gesture classification.

use crate::config::SWIPE_THRESHOLD;

/// Direction of a relative slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    /// Index reached from `current` in a sequence of `len` panels, wrapping around.
    ///
    /// `len` must be non-zero.
    #[must_use]
    pub fn step(self, current: usize, len: usize) -> usize {
        match self {
            Direction::Next => (current + 1) % len,
            Direction::Previous => (current + len - 1) % len,
        }
    }
}

/// Classifies a horizontal swipe from `start_x` to `end_x`.
///
/// Displacements at or below the threshold are ignored. Dragging to the
/// right reveals the previous panel, dragging to the left the next one.
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32) -> Option<Direction> {
    let distance = end_x - start_x;
    if distance.abs() <= SWIPE_THRESHOLD {
        return None;
    }
    if distance > 0.0 {
        Some(Direction::Previous)
    } else {
        Some(Direction::Next)
    }
}

/// Tracks a single touch from press to lift.
///
/// Only the first finger down is followed; other fingers are ignored until
/// it lifts or is lost.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SwipeTracker {
    active: Option<(u64, f32)>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the start of a touch.
    pub fn press(&mut self, finger: u64, x: f32) {
        if self.active.is_none() {
            self.active = Some((finger, x));
        }
    }

    /// Ends a touch and returns the resulting navigation, if any.
    pub fn lift(&mut self, finger: u64, x: f32) -> Option<Direction> {
        match self.active {
            Some((id, start_x)) if id == finger => {
                self.active = None;
                classify_swipe(start_x, x)
            }
            _ => None,
        }
    }

    /// Forgets a touch the platform cancelled.
    pub fn lost(&mut self, finger: u64) {
        if matches!(self.active, Some((id, _)) if id == finger) {
            self.active = None;
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.active.is_some()
    }
}
