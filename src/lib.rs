// SPDX-License-Identifier: MPL-2.0
//! `iced_slides` is a rotating slide carousel built with the Iced GUI framework.
//!
//! The rotation logic lives in [`slider`] and does not depend on Iced: a
//! [`slider::SlideRotation`] is driven by explicit timestamps, which keeps it
//! deterministic under test. [`ui`] and [`app`] wire it to a window.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod slider;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
