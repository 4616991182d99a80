// SPDX-License-Identifier: MPL-2.0
//! Slider newtypes.
//!
//! Type-safe wrappers for the carousel timing values, ensuring they are
//! always within valid ranges.

use crate::config::defaults::{
    DEFAULT_AUTOPLAY_DELAY_MS, DEFAULT_TRANSITION_DURATION_MS, MAX_AUTOPLAY_DELAY_MS,
    MAX_TRANSITION_DURATION_MS, MIN_AUTOPLAY_DELAY_MS, MIN_TRANSITION_DURATION_MS,
};
use std::time::Duration;

// =============================================================================
// AutoplayDelay
// =============================================================================

/// Interval between two automatic advances, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms – 24 h).
///
/// # Example
///
/// ```
/// use iced_slides::domain::slider::AutoplayDelay;
///
/// let delay = AutoplayDelay::from_millis(8000);
/// assert_eq!(delay.value(), 8000);
///
/// // Long intervals are kept as given
/// assert_eq!(AutoplayDelay::from_millis(120_000).value(), 120_000);
///
/// // Values outside range are clamped
/// let too_short = AutoplayDelay::from_millis(10);
/// assert_eq!(too_short.value(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayDelay(u64);

impl AutoplayDelay {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(MIN_AUTOPLAY_DELAY_MS, MAX_AUTOPLAY_DELAY_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Fraction of this interval covered by `elapsed`, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction_of(self, elapsed: Duration) -> f32 {
        let ratio = elapsed.as_secs_f64() / self.as_duration().as_secs_f64();
        ratio.clamp(0.0, 1.0) as f32
    }
}

impl Default for AutoplayDelay {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_DELAY_MS)
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Time an incoming slide needs to settle after the swap, in milliseconds.
///
/// Guaranteed to be within the valid range (0 – 5 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(MIN_TRANSITION_DURATION_MS, MAX_TRANSITION_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn autoplay_delay_clamps_to_valid_range() {
        assert_eq!(AutoplayDelay::from_millis(0).value(), MIN_AUTOPLAY_DELAY_MS);
        assert_eq!(
            AutoplayDelay::from_millis(u64::MAX).value(),
            MAX_AUTOPLAY_DELAY_MS
        );
        assert_eq!(AutoplayDelay::from_millis(3000).value(), 3000);
        assert_eq!(AutoplayDelay::from_millis(120_000).value(), 120_000);
    }

    #[test]
    fn autoplay_delay_default_is_five_seconds() {
        assert_eq!(
            AutoplayDelay::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn fraction_of_is_linear_then_saturates() {
        let delay = AutoplayDelay::default();
        assert_abs_diff_eq!(delay.fraction_of(Duration::ZERO), 0.0);
        assert_abs_diff_eq!(
            delay.fraction_of(Duration::from_millis(1250)),
            0.25,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(delay.fraction_of(Duration::from_secs(60)), 1.0);
    }

    #[test]
    fn transition_duration_clamps_to_valid_range() {
        assert_eq!(
            TransitionDuration::from_millis(99_999).value(),
            MAX_TRANSITION_DURATION_MS
        );
        assert_eq!(TransitionDuration::from_millis(0).value(), 0);
        assert_eq!(
            TransitionDuration::default().value(),
            DEFAULT_TRANSITION_DURATION_MS
        );
    }

    #[test]
    fn equality_works() {
        assert_eq!(AutoplayDelay::from_millis(900), AutoplayDelay::from_millis(900));
        assert_ne!(
            TransitionDuration::from_millis(100),
            TransitionDuration::from_millis(200)
        );
    }
}
