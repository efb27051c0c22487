//! Style filters that narrow the palette before matching.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PaletteEntry;
use crate::color::{Hsl, Rgb};

/// Lightness above which an entry counts as a pastel for [`FilterStyle::Candy`].
const CANDY_PASTEL_LIGHTNESS: u8 = 70;
/// Minimum saturation for pastel entries.
const CANDY_PASTEL_MIN_SATURATION: u8 = 10;
/// Minimum saturation for darker entries; rejects muddy mid-tones.
const CANDY_VIVID_MIN_SATURATION: u8 = 40;
/// Saturation below which an entry counts as neutral for [`FilterStyle::Grayscale`].
const GRAYSCALE_MAX_SATURATION: u8 = 5;

/// A named rule set that narrows the palette to a consistent subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterStyle {
    /// Full palette
    #[default]
    None,
    /// Vivid colors and pastels, plus pure black and white
    Candy,
    /// Near-neutral colors only
    Grayscale,
}

impl FilterStyle {
    pub const ALL: [FilterStyle; 3] = [FilterStyle::None, FilterStyle::Candy, FilterStyle::Grayscale];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterStyle::None => "none",
            FilterStyle::Candy => "candy",
            FilterStyle::Grayscale => "grayscale",
        }
    }

    /// Whether an entry survives this style's rules.
    pub fn keeps(self, entry: &PaletteEntry) -> bool {
        match self {
            FilterStyle::None => true,
            FilterStyle::Candy => {
                let rgb = entry.rgb();
                if rgb == Rgb::WHITE || rgb == Rgb::BLACK {
                    return true;
                }
                let Hsl { s, l, .. } = entry.hsl();
                if l > CANDY_PASTEL_LIGHTNESS {
                    s > CANDY_PASTEL_MIN_SATURATION
                } else {
                    s > CANDY_VIVID_MIN_SATURATION
                }
            }
            FilterStyle::Grayscale => entry.hsl().s < GRAYSCALE_MAX_SATURATION,
        }
    }
}

impl fmt::Display for FilterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterStyle::ALL
            .into_iter()
            .find(|style| s.eq_ignore_ascii_case(style.as_str()))
            .ok_or_else(|| format!("unknown filter style '{s}' (expected none, candy or grayscale)"))
    }
}

/// Derive the candidate palette for a style.
///
/// [`FilterStyle::None`] borrows the input unchanged. Any other style keeps
/// the entries its rules accept, in their original order; if nothing
/// survives, the full palette is returned so matching always has candidates.
///
/// ```
/// use bead_quant::{filter_palette, load_palette, FilterStyle, VendorCodes};
///
/// let palette = load_palette(vec![
///     ("#FF0000", VendorCodes::new()),
///     ("#808080", VendorCodes::new()),
/// ]);
/// let gray = filter_palette(&palette, FilterStyle::Grayscale);
/// assert_eq!(gray.len(), 1);
/// assert_eq!(gray[0].hex, "#808080");
/// ```
pub fn filter_palette(entries: &[PaletteEntry], style: FilterStyle) -> Cow<'_, [PaletteEntry]> {
    if style == FilterStyle::None {
        return Cow::Borrowed(entries);
    }

    let kept: Vec<PaletteEntry> = entries.iter().filter(|e| style.keeps(e)).cloned().collect();

    if kept.is_empty() {
        tracing::debug!(
            %style,
            palette = entries.len(),
            "Style filter removed every entry, using full palette"
        );
        return Cow::Borrowed(entries);
    }

    Cow::Owned(kept)
}
