use bead_quant::{Grid, GridBuilder, GridEdit, GridError, PaletteEntry, ToneOptions};
use std::sync::Arc;
use std::time::Instant;

use crate::error::ApiError;
use crate::models::GridRequest;
use crate::services::PaletteStore;

/// Turns uploaded images into bead grids and applies manual edits
pub struct GridService {
    palette: Arc<PaletteStore>,
    tone: ToneOptions,
}

impl GridService {
    pub fn new(palette: Arc<PaletteStore>, tone: ToneOptions) -> Self {
        Self { palette, tone }
    }

    pub fn palette(&self) -> &PaletteStore {
        &self.palette
    }

    /// Generate a grid from encoded image bytes
    ///
    /// Decoding and matching run in spawn_blocking so that large uploads do
    /// not stall the async runtime. There is no cancellation: a caller that no
    /// longer wants the result simply drops it.
    pub async fn generate(&self, bytes: Vec<u8>, request: GridRequest) -> Result<Grid, ApiError> {
        let entries = self.palette.shared();
        let tone = self.tone;

        let grid = tokio::task::spawn_blocking(move || build(&entries, tone, &bytes, request))
            .await
            .map_err(|e| ApiError::Internal(format!("Grid task failed: {e}")))??;

        Ok(grid)
    }

    /// Generate a grid on the current thread
    pub fn generate_blocking(&self, bytes: &[u8], request: GridRequest) -> Result<Grid, GridError> {
        build(self.palette.entries(), self.tone, bytes, request)
    }

    /// Apply one edit, returning the new grid
    ///
    /// The submitted grid is first rebuilt from the palette, so cells with
    /// colors outside it are rejected and codes are always the palette's.
    pub fn edit(&self, grid: &Grid, edit: &GridEdit) -> Result<Grid, GridError> {
        let entries = self.palette.entries();
        grid.conform_to_palette(entries)?.apply_edit(edit, entries)
    }
}

fn build(
    entries: &[PaletteEntry],
    tone: ToneOptions,
    bytes: &[u8],
    request: GridRequest,
) -> Result<Grid, GridError> {
    let start = Instant::now();

    let grid = GridBuilder::new(entries)
        .size(request.size)
        .style(request.style)
        .scale(request.scale)
        .tone(tone)
        .build_from_bytes(bytes)?;

    tracing::debug!(
        bytes = bytes.len(),
        size = request.size,
        style = %request.style,
        scale = %request.scale,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Generated grid"
    );

    Ok(grid)
}
