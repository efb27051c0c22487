//! Sampling the source image onto an NxN surface.
//!
//! Sampling is nearest-neighbor only: smoothing would blend neighbouring
//! colors into in-between shades that then snap to unrelated beads.

use std::fmt;
use std::str::FromStr;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, RgbaImage};
use serde::{Deserialize, Serialize};

use super::Transparency;

/// How the source image is placed on the square sample surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePolicy {
    /// Draw the source over the whole surface, ignoring aspect ratio.
    ///
    /// Translucent samples are forced to white.
    Stretch,
    /// Fit the source inside the surface preserving aspect ratio and center
    /// it. The uncovered margin stays fully transparent.
    ///
    /// Translucent samples become empty cells.
    #[default]
    Contain,
}

impl ScalePolicy {
    pub const ALL: [ScalePolicy; 2] = [ScalePolicy::Stretch, ScalePolicy::Contain];

    pub fn as_str(self) -> &'static str {
        match self {
            ScalePolicy::Stretch => "stretch",
            ScalePolicy::Contain => "contain",
        }
    }

    /// The transparency handling that goes with this placement.
    pub fn transparency(self) -> Transparency {
        match self {
            ScalePolicy::Stretch => Transparency::White,
            ScalePolicy::Contain => Transparency::Keep,
        }
    }

    /// Where the source lands on a `size`×`size` surface, as
    /// `(x, y, width, height)`.
    ///
    /// Returns `None` when the source has no pixels to draw.
    pub fn placement(self, src_width: u32, src_height: u32, size: u32) -> Option<(u32, u32, u32, u32)> {
        if src_width == 0 || src_height == 0 || size == 0 {
            return None;
        }

        match self {
            ScalePolicy::Stretch => Some((0, 0, size, size)),
            ScalePolicy::Contain => {
                let scale = (size as f64 / src_width as f64).min(size as f64 / src_height as f64);
                let fit = |extent: u32| ((extent as f64 * scale).round() as u32).clamp(1, size);
                let width = fit(src_width);
                let height = fit(src_height);
                Some(((size - width) / 2, (size - height) / 2, width, height))
            }
        }
    }
}

impl fmt::Display for ScalePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalePolicy::ALL
            .into_iter()
            .find(|p| s.eq_ignore_ascii_case(p.as_str()))
            .ok_or_else(|| format!("unknown scale policy '{s}' (expected stretch or contain)"))
    }
}

/// Render `source` onto a cleared `size`×`size` RGBA surface.
///
/// The caller is responsible for `size` being a usable surface size.
pub fn sample_surface(source: &DynamicImage, size: u32, policy: ScalePolicy) -> RgbaImage {
    let mut surface = RgbaImage::new(size, size);

    let (src_width, src_height) = source.dimensions();
    let Some((x, y, width, height)) = policy.placement(src_width, src_height, size) else {
        return surface;
    };

    let scaled = imageops::resize(&source.to_rgba8(), width, height, FilterType::Nearest);
    imageops::replace(&mut surface, &scaled, x as i64, y as i64);

    surface
}
