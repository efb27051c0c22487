//! Palette entries with precomputed RGB channels.

use serde::{Deserialize, Serialize};

use super::VendorCodes;
use crate::color::{Hsl, Rgb};

/// One bead color: the source hex key, its channels, and every vendor's code.
///
/// `hex` is kept exactly as written in the palette source so that grid cells
/// can reproduce it verbatim. The channels are parsed once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub hex: String,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub codes: VendorCodes,
}

impl PaletteEntry {
    /// Parse `hex` and build an entry, or `None` if the key is not a strict
    /// 6-digit hex color.
    pub fn parse(hex: impl Into<String>, codes: VendorCodes) -> Option<Self> {
        let hex = hex.into();
        let rgb: Rgb = hex.parse().ok()?;
        Some(Self {
            hex,
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            codes,
        })
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        Hsl::from(self.rgb())
    }

    /// Case-insensitive hex comparison, ignoring the optional `#` marker.
    pub fn matches_hex(&self, hex: &str) -> bool {
        let strip = |s: &str| s.strip_prefix('#').unwrap_or(s).to_ascii_lowercase();
        strip(&self.hex) == strip(hex)
    }
}
