// SPDX-License-Identifier: MPL-2.0
//! Rotating slide carousel.
//!
//! [`component`] owns the deck and its [`SlideRotation`](crate::slider::SlideRotation)
//! and turns widget messages and routed window events into rotation calls;
//! [`view`] renders it.

pub mod component;
pub mod view;

pub use component::{Message, State};
pub use view::{view, ViewContext};
