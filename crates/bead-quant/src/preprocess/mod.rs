//! Image preprocessing before palette matching.
//!
//! The pipeline has two phases:
//!
//! 1. **Sampling** ([`sample_surface`]): nearest-neighbor downscale onto an
//!    NxN RGBA surface, placed per [`ScalePolicy`]
//! 2. **Tone mapping** ([`ToneMapper`]): contrast, saturation and
//!    shadow/highlight compression on every opaque sample
//!
//! # Transparency
//!
//! Each [`ScalePolicy`] carries its own [`Transparency`] handling.
//! `Contain` keeps translucent samples as they are so they become empty
//! cells; `Stretch` treats the image as having an opaque white background
//! and forces them to white.
//!
//! # Example
//!
//! ```
//! use bead_quant::{sample_surface, ScalePolicy, ToneMapper, ToneOptions};
//! use image::{DynamicImage, Rgba, RgbaImage};
//!
//! let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 4, Rgba([104, 104, 104, 255])));
//!
//! let policy = ScalePolicy::Contain;
//! let mut surface = sample_surface(&source, 4, policy);
//! ToneMapper::new(ToneOptions::default()).apply(&mut surface, policy.transparency());
//!
//! // Top and bottom rows are margin, the middle rows are darkened grey
//! assert_eq!(surface.get_pixel(0, 0).0[3], 0);
//! assert_eq!(surface.get_pixel(0, 1).0, [39, 39, 39, 255]);
//! ```

mod options;
mod resize;
mod tone;

pub use options::ToneOptions;
pub use resize::{sample_surface, ScalePolicy};
pub use tone::{ToneBand, ToneMapper, Transparency};
