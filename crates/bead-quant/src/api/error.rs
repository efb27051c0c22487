//! Error type for grid generation and editing.

use thiserror::Error;

/// Everything that can go wrong while building or editing a grid.
///
/// Skipped palette records and empty candidate lists are not errors; they
/// are handled inside the pipeline.
#[derive(Debug, Error)]
pub enum GridError {
    /// The source bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// No sampling surface can be created for the requested size.
    #[error("cannot create a {size}x{size} sampling surface")]
    SurfaceUnavailable { size: u32 },

    /// An edit addressed a cell outside the grid.
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// A paint edit used a color that is not in the palette.
    #[error("color {0} is not in the palette")]
    UnknownColor(String),

    /// A preview image would be larger than the renderer allows.
    #[error("a {size}x{size} grid at {cell_px}px per cell is too large to preview")]
    PreviewTooLarge { size: usize, cell_px: u32 },

    /// Rows do not form a non-empty square.
    #[error("invalid grid shape: {0}")]
    InvalidShape(String),
}
