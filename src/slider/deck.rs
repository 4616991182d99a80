// SPDX-License-Identifier: MPL-2.0
//! Slide decks: the ordered, read-only panel sequence a carousel rotates.
//!
//! A deck is described in TOML:
//!
//! ```toml
//! [[slides]]
//! title = "Built for the open road"
//! caption = "Adaptive cruise, lane keeping and a quiet cabin."
//! gradient = ["#0f2027", "#2c5364"]
//! ```
//!
//! A deck path that does not exist yields an empty deck, which makes the
//! carousel inert rather than failing start-up.

use crate::error::{DeckError, Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/decks/"]
struct DeckAsset;

/// Name of the embedded deck used when no deck path is given.
pub const SHOWCASE_DECK: &str = "showcase.toml";

/// An sRGB color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn parse_hex(raw: &str) -> std::result::Result<Self, DeckError> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DeckError::InvalidColor(raw.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| DeckError::InvalidColor(raw.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// One rotating content frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub caption: String,
    /// Optional call-to-action label.
    pub action: Option<String>,
    /// Top-left and bottom-right gradient stops.
    pub gradient: [Rgb; 2],
}

#[derive(Debug, Deserialize)]
struct RawDeck {
    #[serde(default)]
    slides: Vec<RawSlide>,
}

#[derive(Debug, Deserialize)]
struct RawSlide {
    title: String,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    action: Option<String>,
    gradient: [String; 2],
}

impl TryFrom<RawSlide> for Slide {
    type Error = DeckError;

    fn try_from(raw: RawSlide) -> std::result::Result<Self, Self::Error> {
        let [start, end] = raw.gradient;
        Ok(Slide {
            title: raw.title,
            caption: raw.caption,
            action: raw.action,
            gradient: [Rgb::parse_hex(&start)?, Rgb::parse_hex(&end)?],
        })
    }
}

/// Ordered, fixed-size list of slides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Parses a deck from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawDeck =
            toml::from_str(content).map_err(|e| DeckError::Malformed(e.message().to_string()))?;
        let slides = raw
            .slides
            .into_iter()
            .map(Slide::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { slides })
    }

    /// Loads a deck file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The deck embedded in the binary.
    pub fn showcase() -> Result<Self> {
        let asset = DeckAsset::get(SHOWCASE_DECK)
            .ok_or_else(|| Error::from(DeckError::MissingAsset(SHOWCASE_DECK.to_string())))?;
        Self::from_toml_str(&String::from_utf8_lossy(asset.data.as_ref()))
    }

    /// Resolves a deck locator, degrading to an empty deck on any failure.
    ///
    /// `None` selects the embedded showcase deck. Returns the deck and, when
    /// loading failed, a message key describing the problem.
    pub fn locate(locator: Option<&Path>) -> (Self, Option<String>) {
        let result = match locator {
            None => Self::showcase(),
            Some(path) if !path.exists() => {
                log::info!("No deck at {}; carousel stays inert", path.display());
                return (Self::default(), None);
            }
            Some(path) => Self::load(path),
        };

        match result {
            Ok(deck) => (deck, None),
            Err(err) => {
                log::warn!("Failed to load slide deck: {}", err);
                let key = match &err {
                    Error::Deck(deck_err) => deck_err.i18n_key(),
                    _ => "notification-deck-load-error",
                };
                (Self::default(), Some(key.to_string()))
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
