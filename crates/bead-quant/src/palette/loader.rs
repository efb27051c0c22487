//! Palette loading from a hex → vendor-code table.

use serde_json::{Map, Value};

use super::{PaletteEntry, PaletteError, VendorCodes};

/// Build palette entries from `(hex, codes)` pairs, in source order.
///
/// Keys that are not strict 6-digit hex colors (optionally `#`-prefixed,
/// any case) are skipped. A skip is not an error: the rest of the palette
/// loads normally.
///
/// ```
/// use bead_quant::{load_palette, Vendor, VendorCodes};
///
/// let source = vec![
///     ("#FF0000", VendorCodes::new().with(Vendor::Mard, "F5")),
///     ("bogus", VendorCodes::new()),
///     ("00ff00", VendorCodes::new().with(Vendor::Mard, "B3")),
/// ];
/// let palette = load_palette(source);
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette[1].hex, "00ff00");
/// ```
pub fn load_palette<I, K>(source: I) -> Vec<PaletteEntry>
where
    I: IntoIterator<Item = (K, VendorCodes)>,
    K: Into<String>,
{
    let mut skipped = 0usize;
    let entries: Vec<PaletteEntry> = source
        .into_iter()
        .filter_map(|(hex, codes)| {
            let hex: String = hex.into();
            match PaletteEntry::parse(hex.as_str(), codes) {
                Some(entry) => Some(entry),
                None => {
                    tracing::debug!(%hex, "Skipping palette entry with invalid hex key");
                    skipped += 1;
                    None
                }
            }
        })
        .collect();

    if skipped > 0 {
        tracing::debug!(
            loaded = entries.len(),
            skipped,
            "Palette loaded with skipped entries"
        );
    }

    entries
}

/// Parse a JSON palette document and load it.
///
/// The document is an object whose keys are hex colors and whose values are
/// objects mapping vendor names to codes. Key order is preserved, which
/// matters because the matcher breaks distance ties by position.
///
/// # Errors
///
/// Returns [`PaletteError::Json`] if the text is not valid JSON, is not an
/// object, or a value is not an object of strings.
pub fn parse_palette_json(json: &str) -> Result<Vec<PaletteEntry>, PaletteError> {
    let table: Map<String, Value> = serde_json::from_str(json)?;

    let source = table
        .into_iter()
        .map(|(hex, codes)| Ok((hex, serde_json::from_value::<VendorCodes>(codes)?)))
        .collect::<Result<Vec<_>, serde_json::Error>>()?;

    Ok(load_palette(source))
}
