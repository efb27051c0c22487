//! 8-bit RGB color type
//!
//! Bead palettes are keyed by plain `RRGGBB` hex strings and matched with
//! integer channel arithmetic, so this type stays in byte space throughout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::palette::ParseColorError;

/// A color as three 8-bit sRGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel bytes.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// The largest possible value is `3 * 255²`, which fits in a `u32`.
    ///
    /// ```
    /// use bead_quant::Rgb;
    ///
    /// let red = Rgb::new(255, 0, 0);
    /// let green = Rgb::new(0, 255, 0);
    /// assert_eq!(red.distance_squared(green), 2 * 255 * 255);
    /// assert_eq!(red.distance_squared(red), 0);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a strict 6-digit hex string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Shorthand forms,
    /// surrounding whitespace and any other characters are rejected.
    ///
    /// ```
    /// use bead_quant::Rgb;
    ///
    /// let coral: Rgb = "#ff7f50".parse().unwrap();
    /// assert_eq!(coral, Rgb::new(255, 127, 80));
    ///
    /// assert!("#F00".parse::<Rgb>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        // from_str_radix accepts a leading '+', and the byte slicing below
        // must only ever see ASCII
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        let r = u8::from_str_radix(&digits[0..2], 16)?;
        let g = u8::from_str_radix(&digits[2..4], 16)?;
        let b = u8::from_str_radix(&digits[4..6], 16)?;
        Ok(Self::new(r, g, b))
    }
}
