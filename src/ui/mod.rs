// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! UI code follows the Elm-style "state down, messages up" pattern.
//!
//! - [`carousel`] - The rotating slide carousel
//! - [`styles`] - Centralized styling (buttons, containers, overlays, progress)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod styles;
pub mod theming;
