//! GridBuilder: the primary entry point for turning an image into beads.
//!
//! [`GridBuilder`] wraps the pipeline (sampling, tone mapping, palette
//! filtering, matching) behind a fluent builder with sensible defaults.

use std::time::Instant;

use image::DynamicImage;

use super::GridError;
use crate::color::Rgb;
use crate::output::{Grid, GridCell};
use crate::palette::{filter_palette, find_nearest_color, FilterStyle, PaletteEntry};
use crate::preprocess::{sample_surface, ScalePolicy, ToneMapper, ToneOptions};

/// Grid side length used when none is configured.
pub const DEFAULT_GRID_SIZE: u32 = 50;

/// Largest sampling surface the builder will allocate.
pub const MAX_SURFACE_SIZE: u32 = 1024;

/// High-level grid builder.
///
/// # Design
///
/// - Constructor borrows the full palette; filtering happens per build
/// - Configuration methods consume and return `self`
/// - [`build()`](Self::build) takes `&self`, so one builder can serve many
///   images
/// - A build either returns a complete grid or an error, never a partial one
///
/// # Example
///
/// ```
/// use bead_quant::{load_palette, GridBuilder, ScalePolicy, Vendor, VendorCodes};
/// use image::{DynamicImage, Rgba, RgbaImage};
///
/// let palette = load_palette(vec![
///     ("#FF0000", VendorCodes::new().with(Vendor::Mard, "F5")),
///     ("#00FF00", VendorCodes::new().with(Vendor::Mard, "B3")),
/// ]);
///
/// let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255])));
/// let grid = GridBuilder::new(&palette)
///     .size(4)
///     .scale(ScalePolicy::Stretch)
///     .build(&image)
///     .unwrap();
///
/// assert_eq!(grid.size(), 4);
/// assert!(grid.cells().all(|(_, _, cell)| cell.hex == "#FF0000"));
/// ```
#[derive(Debug, Clone)]
pub struct GridBuilder<'a> {
    palette: &'a [PaletteEntry],
    size: u32,
    style: FilterStyle,
    scale: ScalePolicy,
    tone: ToneOptions,
}

impl<'a> GridBuilder<'a> {
    /// Create a builder over `palette` with size 50, no style filter and
    /// contain scaling.
    pub fn new(palette: &'a [PaletteEntry]) -> Self {
        Self {
            palette,
            size: DEFAULT_GRID_SIZE,
            style: FilterStyle::default(),
            scale: ScalePolicy::default(),
            tone: ToneOptions::default(),
        }
    }

    /// Set the grid side length.
    #[inline]
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    #[inline]
    pub fn style(mut self, style: FilterStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn scale(mut self, scale: ScalePolicy) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn tone(mut self, tone: ToneOptions) -> Self {
        self.tone = tone;
        self
    }

    /// Decode `bytes` and build a grid from the result.
    ///
    /// # Errors
    ///
    /// [`GridError::Decode`] if the bytes are not a supported image, plus
    /// everything [`build`](Self::build) can return.
    pub fn build_from_bytes(&self, bytes: &[u8]) -> Result<Grid, GridError> {
        let image = image::load_from_memory(bytes)?;
        self.build(&image)
    }

    /// Build a `size`×`size` grid from `image`.
    ///
    /// # Errors
    ///
    /// [`GridError::SurfaceUnavailable`] if the size is zero or larger than
    /// [`MAX_SURFACE_SIZE`].
    pub fn build(&self, image: &DynamicImage) -> Result<Grid, GridError> {
        let size = self.size;
        if size == 0 || size > MAX_SURFACE_SIZE {
            return Err(GridError::SurfaceUnavailable { size });
        }

        let start = Instant::now();

        let mut surface = sample_surface(image, size, self.scale);
        let mapper = ToneMapper::new(self.tone);
        mapper.apply(&mut surface, self.scale.transparency());

        let candidates = filter_palette(self.palette, self.style);

        let cells = surface
            .pixels()
            .map(|pixel| {
                let [r, g, b, a] = pixel.0;
                if mapper.is_opaque(a) {
                    find_nearest_color(&candidates, Rgb::new(r, g, b))
                } else {
                    GridCell::empty()
                }
            })
            .collect();

        let grid = Grid::from_row_major(cells, size as usize);

        tracing::debug!(
            size,
            style = %self.style,
            scale = %self.scale,
            candidates = candidates.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Built bead grid"
        );

        Ok(grid)
    }
}
