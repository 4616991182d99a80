// SPDX-License-Identifier: MPL-2.0
//! Carousel behaviour, independent of the UI toolkit.
//!
//! - [`deck`]: the slides being rotated
//! - [`rotation`]: the timer-driven rotation controller
//! - [`schedule`]: cancellable task handles the controller owns
//! - [`input`]: navigation direction and swipe classification

pub mod deck;
pub mod input;
pub mod rotation;
pub mod schedule;

pub use deck::{Rgb, Slide, SlideDeck};
pub use input::{classify_swipe, Direction, SwipeTracker};
pub use rotation::{RotationEvent, SlideRotation, SliderOptions};
