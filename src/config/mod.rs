// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[slider]` - Autoplay and transition timing of the carousel
//!
//! Keys in `[slider]` that this version does not know about are kept as-is
//! and written back on save; they have no effect on the carousel.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SLIDES_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_slides::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Slow the rotation down
//! config.slider.autoplay_delay_ms = Some(8000);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::slider::{AutoplayDelay, TransitionDuration};
use crate::error::{Error, Result};
use crate::slider::SliderOptions;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Carousel timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    /// Rotate slides automatically.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Interval between automatic advances (milliseconds).
    #[serde(
        default = "default_autoplay_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub autoplay_delay_ms: Option<u64>,

    /// Settle time of a slide change after the exit phase (milliseconds).
    #[serde(
        default = "default_transition_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_duration_ms: Option<u64>,

    /// Unrecognized keys, carried through load/save untouched.
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            autoplay_delay_ms: default_autoplay_delay_ms(),
            transition_duration_ms: default_transition_duration_ms(),
            extra: toml::Table::new(),
        }
    }
}

impl SliderConfig {
    /// Resolves the section into controller options, clamping out-of-range values.
    ///
    /// A zero delay counts as unset, so it falls back to the default.
    #[must_use]
    pub fn options(&self) -> SliderOptions {
        let autoplay_delay = match self.autoplay_delay_ms {
            Some(ms) if ms > 0 => {
                let delay = AutoplayDelay::from_millis(ms);
                if delay.value() != ms {
                    log::warn!(
                        "autoplay_delay_ms = {} is out of range, using {}",
                        ms,
                        delay.value()
                    );
                }
                delay
            }
            _ => AutoplayDelay::default(),
        };
        let transition_duration = match self.transition_duration_ms {
            Some(ms) if ms > 0 => {
                let duration = TransitionDuration::from_millis(ms);
                if duration.value() != ms {
                    log::warn!(
                        "transition_duration_ms = {} is out of range, using {}",
                        ms,
                        duration.value()
                    );
                }
                duration
            }
            _ => TransitionDuration::default(),
        };

        SliderOptions {
            autoplay: self.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
            autoplay_delay,
            transition_duration,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Carousel timing settings.
    #[serde(default)]
    pub slider: SliderConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_autoplay_delay_ms() -> Option<u64> {
    Some(DEFAULT_AUTOPLAY_DELAY_MS)
}

fn default_transition_duration_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            slider: SliderConfig {
                autoplay: Some(false),
                autoplay_delay_ms: Some(7000),
                transition_duration_ms: Some(300),
                extra: toml::Table::new(),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.slider, SliderConfig::default());
        assert_eq!(config.slider.autoplay, Some(true));
        assert_eq!(config.slider.autoplay_delay_ms, Some(DEFAULT_AUTOPLAY_DELAY_MS));
    }

    #[test]
    fn unknown_slider_keys_are_carried_through() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[slider]\nautoplay = true\neasing = \"ease-out\"\nloop = false\n",
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(
            loaded.slider.extra.get("easing").and_then(|v| v.as_str()),
            Some("ease-out")
        );
        assert_eq!(
            loaded.slider.extra.get("loop").and_then(|v| v.as_bool()),
            Some(false)
        );

        save_to_path(&loaded, &config_path).expect("save");
        let written = fs::read_to_string(&config_path).expect("read back");
        assert!(written.contains("easing = \"ease-out\""));
    }

    #[test]
    fn options_use_configured_values() {
        let slider = SliderConfig {
            autoplay: Some(false),
            autoplay_delay_ms: Some(8000),
            transition_duration_ms: Some(250),
            extra: toml::Table::new(),
        };
        let options = slider.options();
        assert!(!options.autoplay);
        assert_eq!(options.autoplay_delay.as_duration(), Duration::from_millis(8000));
        assert_eq!(
            options.transition_duration.as_duration(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn options_keep_long_autoplay_delays() {
        let slider = SliderConfig {
            autoplay_delay_ms: Some(120_000),
            ..SliderConfig::default()
        };
        assert_eq!(
            slider.options().autoplay_delay.as_duration(),
            Duration::from_secs(120)
        );
    }

    #[test]
    fn options_treat_zero_as_unset_and_clamp_extremes() {
        let slider = SliderConfig {
            autoplay: None,
            autoplay_delay_ms: Some(0),
            transition_duration_ms: Some(1_000_000),
            extra: toml::Table::new(),
        };
        let options = slider.options();
        assert!(options.autoplay);
        assert_eq!(options.autoplay_delay.value(), DEFAULT_AUTOPLAY_DELAY_MS);
        assert_eq!(
            options.transition_duration.value(),
            MAX_TRANSITION_DURATION_MS
        );
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "[slider\nautoplay = ").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_with_override(&Config::default(), Some(nested_dir.clone()))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }
}
