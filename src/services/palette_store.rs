use bead_quant::{filter_palette, parse_palette_json, FilterStyle, PaletteEntry};
use std::borrow::Cow;
use std::sync::Arc;

use crate::assets::AssetLoader;

/// The bead palette, loaded once and shared read-only
#[derive(Debug, Clone)]
pub struct PaletteStore {
    entries: Arc<[PaletteEntry]>,
}

impl PaletteStore {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        if entries.is_empty() {
            tracing::warn!("Palette is empty, every bead will fall back to white");
        }
        Self {
            entries: entries.into(),
        }
    }

    /// Load the palette from AssetLoader (embedded or external)
    ///
    /// A palette that cannot be read or parsed is logged and replaced by an
    /// empty one.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        let entries = match loader.read_palette_string() {
            Ok(content) => match parse_palette_json(&content) {
                Ok(entries) => {
                    tracing::info!(colors = entries.len(), "Loaded palette");
                    entries
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse palette");
                    Vec::new()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read palette");
                Vec::new()
            }
        };
        Self::new(entries)
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Shared handle to the entries, for moving into blocking tasks
    pub fn shared(&self) -> Arc<[PaletteEntry]> {
        self.entries.clone()
    }

    /// The candidates for `style`, falling back to the full palette when the
    /// style keeps nothing
    pub fn filtered(&self, style: FilterStyle) -> Cow<'_, [PaletteEntry]> {
        filter_palette(&self.entries, style)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
