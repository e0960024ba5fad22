//! Crate-level error types.

use std::fmt;

/// Errors produced by the showreel crate.
#[derive(Debug)]
pub enum ShowreelError {
    /// Deck failed validation (empty, duplicate id, non-monotonic anchors).
    Deck(String),
    /// Deck JSON parsing failure.
    DeckParse(String),
    /// Path model construction failure.
    Path(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for ShowreelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deck(msg) => write!(f, "deck error: {msg}"),
            Self::DeckParse(msg) => write!(f, "deck parse error: {msg}"),
            Self::Path(msg) => write!(f, "path error: {msg}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ShowreelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShowreelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
