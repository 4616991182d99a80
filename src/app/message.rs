// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
    /// Hide the startup notice banner.
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional deck file; the built-in deck is used when absent.
    pub deck_path: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SLIDES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Start with autoplay disabled regardless of settings.
    pub no_autoplay: bool,
    /// Autoplay interval override in milliseconds.
    pub autoplay_delay_ms: Option<u64>,
    /// Transition settle time override in milliseconds.
    pub transition_duration_ms: Option<u64>,
}
