//! Error types for palette operations
//!
//! Color parsing errors are returned per hex key; the loader turns them into
//! silent skips. Only a structurally broken palette document is a
//! [`PaletteError`].

use std::num::ParseIntError;

use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string does not have exactly 6 digits after the optional `#`
    #[error("invalid hex color length {0} (expected 6 digits)")]
    InvalidLength(usize),

    /// Character outside `0-9a-fA-F`
    #[error("invalid hex character {0:?}")]
    InvalidDigit(char),

    #[error("invalid hex value: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for loading a palette document.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The document is not a JSON object of hex keys to vendor-code records
    #[error("invalid palette JSON: {0}")]
    Json(#[from] serde_json::Error),
}
