// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Autoplay**: Timer-driven rotation interval
//! - **Transition**: Exit window and settle duration of a slide change
//! - **Input**: Gesture thresholds

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Whether the carousel rotates on its own when first shown.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default interval between two automatic advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_DELAY_MS: u64 = 5000;

/// Minimum autoplay interval (in milliseconds).
pub const MIN_AUTOPLAY_DELAY_MS: u64 = 500;

/// Maximum autoplay interval (in milliseconds). One day; keeps deadline
/// arithmetic on `Instant` far from overflow.
pub const MAX_AUTOPLAY_DELAY_MS: u64 = 86_400_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default time the incoming slide needs to settle (in milliseconds).
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 600;

/// Minimum transition duration (in milliseconds).
pub const MIN_TRANSITION_DURATION_MS: u64 = 0;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_DURATION_MS: u64 = 5000;

/// Time the outgoing slide keeps its exit styling before the swap (in milliseconds).
pub const EXIT_PHASE_MS: u64 = 100;

// ==========================================================================
// Input Defaults
// ==========================================================================

/// Horizontal displacement a swipe must exceed to count as navigation.
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Autoplay validation
    assert!(MIN_AUTOPLAY_DELAY_MS > 0);
    assert!(MAX_AUTOPLAY_DELAY_MS >= MIN_AUTOPLAY_DELAY_MS);
    assert!(DEFAULT_AUTOPLAY_DELAY_MS >= MIN_AUTOPLAY_DELAY_MS);
    assert!(DEFAULT_AUTOPLAY_DELAY_MS <= MAX_AUTOPLAY_DELAY_MS);

    // Transition validation
    assert!(MAX_TRANSITION_DURATION_MS >= MIN_TRANSITION_DURATION_MS);
    assert!(DEFAULT_TRANSITION_DURATION_MS >= MIN_TRANSITION_DURATION_MS);
    assert!(DEFAULT_TRANSITION_DURATION_MS <= MAX_TRANSITION_DURATION_MS);
    assert!(EXIT_PHASE_MS > 0);

    // Input validation
    assert!(SWIPE_THRESHOLD > 0.0);
};
