// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded in the binary from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Fallback to `en-US` when no preferred locale is available
//! - Visible `MISSING: <key>` markers for untranslated strings

pub mod fluent;
