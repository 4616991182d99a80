// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Deck(DeckError),
}

/// Specific reasons a slide deck could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// The deck file is not valid TOML or misses required fields.
    Malformed(String),

    /// A gradient stop is not a `#rrggbb` color.
    InvalidColor(String),

    /// The embedded deck asset is missing from the binary.
    MissingAsset(String),
}

impl DeckError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DeckError::Malformed(_) => "error-deck-malformed",
            DeckError::InvalidColor(_) => "error-deck-invalid-color",
            DeckError::MissingAsset(_) => "error-deck-missing-asset",
        }
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Malformed(msg) => write!(f, "Malformed deck: {}", msg),
            DeckError::InvalidColor(color) => write!(f, "Invalid gradient color: {}", color),
            DeckError::MissingAsset(name) => write!(f, "Missing embedded deck: {}", name),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Deck(e) => write!(f, "Deck Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Error::Deck(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
