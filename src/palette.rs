//! Brand palette
//!
//! The four colors every asset is painted with. The built-in palette is the
//! Emberly theme; a TOML file can override any of the four tokens.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// `[colors]` keys for the four palette roles
const SYMBOL: &str = "symbol";
const WORDMARK: &str = "wordmark";
const BACKGROUND_LIGHT: &str = "background-light";
const BACKGROUND_DARK: &str = "background-dark";

/// Errors that can occur when loading or parsing palettes
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Failed to read palette file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse palette TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Palette is missing color '{0}'")]
    MissingColor(&'static str),
}

/// The resolved brand colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Dusty Terracotta in the default theme
    pub symbol: String,
    /// Deep Umber in the default theme
    pub wordmark: String,
    pub background_light: String,
    pub background_dark: String,
}

/// TOML structure for deserializing palettes
///
/// Other tables, such as `[metadata]`, are accepted and ignored.
#[derive(Deserialize)]
struct TomlPalette {
    #[serde(default)]
    colors: HashMap<String, String>,
}

/// Emberly theme colors
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "Emberly"
description = "Dusty Terracotta symbol, Deep Umber wordmark"

[colors]
symbol = "#d9a58b"
wordmark = "#5a524c"

# Subtle backgrounds from the app theme
background-light = "#f8f6f4"
background-dark = "#2d2520"
"##;

impl Palette {
    /// Load palette overrides from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load palette overrides from a TOML string
    ///
    /// Tokens absent from `content` keep their default value. Unknown tokens
    /// are ignored.
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        let defaults = Self::parse_complete(DEFAULT_PALETTE)?;

        let pick = |token: &str, fallback: String| {
            parsed.colors.get(token).cloned().unwrap_or(fallback)
        };

        Ok(Palette {
            symbol: pick(SYMBOL, defaults.symbol),
            wordmark: pick(WORDMARK, defaults.wordmark),
            background_light: pick(BACKGROUND_LIGHT, defaults.background_light),
            background_dark: pick(BACKGROUND_DARK, defaults.background_dark),
        })
    }

    /// Parse a palette that must define all four tokens
    fn parse_complete(content: &str) -> Result<Self, PaletteError> {
        let parsed: TomlPalette = toml::from_str(content)?;
        let take = |token: &'static str| {
            parsed
                .colors
                .get(token)
                .cloned()
                .ok_or(PaletteError::MissingColor(token))
        };

        Ok(Palette {
            symbol: take(SYMBOL)?,
            wordmark: take(WORDMARK)?,
            background_light: take(BACKGROUND_LIGHT)?,
            background_dark: take(BACKGROUND_DARK)?,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::parse_complete(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.symbol, self.wordmark, self.background_light, self.background_dark
        )
    }
}
