//! Per-sample tone mapping.
//!
//! Bead palettes are coarse, so samples are pushed apart before matching:
//! contrast and saturation are raised, dark samples are pulled toward black
//! and light samples toward white. Without this pass, mid-tone photos map
//! onto a handful of muddy greys.
//!
//! # Order of operations
//!
//! For every sample with alpha at or above the opaque cutoff:
//!
//! 1. **Contrast**: `c' = (c - 128) * contrast + 128`
//! 2. **Saturation**: `gray = 0.299 r' + 0.587 g' + 0.114 b'`, then
//!    `c'' = gray + (c' - gray) * saturation`
//! 3. **Shadow/highlight**: `gray < shadow` scales every channel by
//!    `compression`; `gray > highlight` applies `255 - (255 - c) * compression`.
//!    The decision uses the pre-saturation `gray`; values exactly on a
//!    threshold are left alone.
//! 4. **Quantize**: round, then clamp to `0..=255`.

use image::RgbaImage;

use super::ToneOptions;
use crate::color::Rgb;

/// Which branch of the shadow/highlight step a luma value falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneBand {
    /// Luma below the shadow threshold; compressed toward black
    Shadow,
    /// Left unchanged
    Midtone,
    /// Luma above the highlight threshold; compressed toward white
    Highlight,
}

/// How samples below the opaque cutoff are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    /// Leave the sample untouched; the grid builder emits an empty cell.
    Keep,
    /// Force the sample to opaque white with no further processing.
    White,
}

/// Luma weights (ITU-R BT.601)
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

const MIDPOINT: f64 = 128.0;

/// Applies the tone curve described in the [module docs](self).
#[derive(Debug, Clone, Copy, Default)]
pub struct ToneMapper {
    options: ToneOptions,
}

impl ToneMapper {
    #[inline]
    pub fn new(options: ToneOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &ToneOptions {
        &self.options
    }

    /// Classify a luma value against the shadow/highlight thresholds.
    #[inline]
    pub fn band(&self, gray: f64) -> ToneBand {
        if gray < self.options.shadow_threshold {
            ToneBand::Shadow
        } else if gray > self.options.highlight_threshold {
            ToneBand::Highlight
        } else {
            ToneBand::Midtone
        }
    }

    /// Whether a sample with this alpha gets tone mapped.
    #[inline]
    pub fn is_opaque(&self, alpha: u8) -> bool {
        alpha >= self.options.opaque_cutoff
    }

    /// Tone map one opaque color.
    ///
    /// ```
    /// use bead_quant::{Rgb, ToneMapper, ToneOptions};
    ///
    /// let mapper = ToneMapper::new(ToneOptions::default());
    /// // Pure red gets darker: its post-contrast luma lands in the shadows
    /// assert_eq!(mapper.map_rgb(Rgb::new(255, 0, 0)), Rgb::new(133, 0, 0));
    /// ```
    pub fn map_rgb(&self, rgb: Rgb) -> Rgb {
        let opts = &self.options;
        let contrast = |c: u8| (c as f64 - MIDPOINT) * opts.contrast + MIDPOINT;

        let r = contrast(rgb.r);
        let g = contrast(rgb.g);
        let b = contrast(rgb.b);

        let gray = LUMA_R * r + LUMA_G * g + LUMA_B * b;
        let saturate = |c: f64| gray + (c - gray) * opts.saturation;
        let mut channels = [saturate(r), saturate(g), saturate(b)];

        match self.band(gray) {
            ToneBand::Shadow => {
                for c in &mut channels {
                    *c *= opts.compression;
                }
            }
            ToneBand::Highlight => {
                for c in &mut channels {
                    *c = 255.0 - (255.0 - *c) * opts.compression;
                }
            }
            ToneBand::Midtone => {}
        }

        let [r, g, b] = channels.map(quantize);
        Rgb::new(r, g, b)
    }

    /// Tone map a sample surface in place.
    pub fn apply(&self, surface: &mut RgbaImage, transparency: Transparency) {
        for pixel in surface.pixels_mut() {
            let [r, g, b, a] = pixel.0;

            if !self.is_opaque(a) {
                if transparency == Transparency::White {
                    pixel.0 = [255, 255, 255, 255];
                }
                continue;
            }

            let mapped = self.map_rgb(Rgb::new(r, g, b));
            pixel.0 = [mapped.r, mapped.g, mapped.b, a];
        }
    }
}

#[inline]
fn quantize(c: f64) -> u8 {
    c.round().clamp(0.0, 255.0) as u8
}
