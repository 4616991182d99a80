// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core rotation rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`slider`]: Carousel timing types ([`AutoplayDelay`](slider::AutoplayDelay),
//!   [`TransitionDuration`](slider::TransitionDuration)) and the
//!   [`TransitionPhase`](slider::TransitionPhase) state machine

pub mod slider;
