// SPDX-License-Identifier: MPL-2.0
//! Slider domain types.
//!
//! Value objects and the transition state machine used by the slide
//! rotation controller, independent of any presentation framework.

pub mod newtypes;
pub mod phase;

pub use newtypes::{AutoplayDelay, TransitionDuration};
pub use phase::{PanelState, TransitionPhase, TransitionStage};
