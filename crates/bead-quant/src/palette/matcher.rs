//! Nearest-color matching by squared RGB distance.
//!
//! The scan is exhaustive. Bead palettes hold tens to a few hundred colors
//! and grids top out at a few thousand cells, so a linear pass per sample is
//! cheap enough that no spatial index is kept.

use super::PaletteEntry;
use crate::color::Rgb;
use crate::output::GridCell;

/// Find the candidate closest to `target`.
///
/// Returns `None` only for an empty candidate list. Ties go to the candidate
/// that appears first.
pub fn nearest_entry(candidates: &[PaletteEntry], target: Rgb) -> Option<&PaletteEntry> {
    let mut best: Option<&PaletteEntry> = None;
    let mut best_dist = u32::MAX;

    for entry in candidates {
        let dist = target.distance_squared(entry.rgb());
        // Strict comparison keeps the first of equally distant entries
        if best.is_none() || dist < best_dist {
            best_dist = dist;
            best = Some(entry);
        }
    }

    best
}

/// Resolve `target` to a grid cell.
///
/// An empty candidate list yields [`GridCell::fallback`] (white, every code
/// `"-"`) instead of an error.
///
/// ```
/// use bead_quant::{find_nearest_color, load_palette, Rgb, Vendor, VendorCodes};
///
/// let palette = load_palette(vec![
///     ("#000000", VendorCodes::new().with(Vendor::Mard, "H7")),
///     ("#FFFFFF", VendorCodes::new().with(Vendor::Mard, "H2")),
/// ]);
///
/// let cell = find_nearest_color(&palette, Rgb::new(30, 20, 40));
/// assert_eq!(cell.hex, "#000000");
/// assert_eq!(cell.codes.get(Vendor::Mard), Some("H7"));
/// ```
pub fn find_nearest_color(candidates: &[PaletteEntry], target: Rgb) -> GridCell {
    nearest_entry(candidates, target)
        .map(GridCell::from)
        .unwrap_or_else(GridCell::fallback)
}
