//! bead-quant: turn images into fuse-bead grids
//!
//! This library samples an image onto a square grid, pushes each sample
//! apart with a tone curve and snaps it to the nearest color of a bead
//! palette. Every resulting cell carries the matched color and that color's
//! code for each supported bead vendor.
//!
//! # Quick Start
//!
//! The [`GridBuilder`] is the primary entry point:
//!
//! ```
//! use bead_quant::{parse_palette_json, GridBuilder, Vendor};
//! use image::{DynamicImage, Rgba, RgbaImage};
//!
//! let palette = parse_palette_json(r##"{
//!     "#000000": {"MARD": "H7", "COCO": "E02"},
//!     "#FFFFFF": {"MARD": "H2", "COCO": "E01"}
//! }"##).unwrap();
//!
//! let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([30, 30, 30, 255])));
//! let grid = GridBuilder::new(&palette).size(8).build(&image).unwrap();
//!
//! assert_eq!(grid.size(), 8);
//! assert_eq!(grid.cell(0, 0).unwrap().code(Vendor::Coco), Some("E02"));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! DynamicImage
//!     |
//!     v
//! sample_surface          (nearest-neighbor onto NxN, contain or stretch)
//!     |
//!     v
//! ToneMapper::apply       (contrast, saturation, shadow/highlight push)
//!     |
//!     v
//! find_nearest_color      (squared RGB distance against the filtered palette)
//!     |
//!     v
//! Grid                    (row-major cells with per-vendor codes)
//! ```
//!
//! # Transparency
//!
//! Transparency handling follows the [`ScalePolicy`]. With
//! [`ScalePolicy::Contain`] the margins and any translucent samples become
//! empty cells (`hex == "transparent"`). With [`ScalePolicy::Stretch`]
//! translucent samples are forced to opaque white before matching, so every
//! cell holds a bead.
//!
//! # Distance
//!
//! Matching uses plain squared Euclidean distance in sRGB. It is not
//! perceptual, but bead palettes are sparse enough that the tone pre-pass
//! matters far more than the metric.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{GridBuilder, GridError, DEFAULT_GRID_SIZE, MAX_SURFACE_SIZE};
pub use color::{Hsl, Rgb};
pub use output::{render_chart, render_preview, BeadCount, Grid, GridCell, GridEdit, MAX_PREVIEW_SIDE};
pub use palette::{
    filter_palette, find_nearest_color, load_palette, nearest_entry, parse_palette_json,
    FilterStyle, PaletteEntry, PaletteError, ParseColorError, Vendor, VendorCodes,
};
pub use preprocess::{sample_surface, ScalePolicy, ToneBand, ToneMapper, ToneOptions, Transparency};
