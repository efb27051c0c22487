//! Tone mapping options.
//!
//! This module provides the [`ToneOptions`] struct for configuring the
//! contrast/saturation/shadow-highlight pre-pass applied before matching.

use serde::{Deserialize, Serialize};

/// Configuration for the tone mapping pre-pass.
///
/// # Defaults
///
/// - Contrast: 1.25 around the 128 midpoint
/// - Saturation: 1.2 away from the luma value
/// - Shadow threshold: luma below 100 is pushed toward black
/// - Highlight threshold: luma above 155 is pushed toward white
/// - Compression: 0.4 (distance to black/white kept after the push)
/// - Opaque cutoff: samples with alpha below 250 are not tone mapped
///
/// # Example
///
/// ```
/// use bead_quant::ToneOptions;
///
/// let options = ToneOptions::new()
///     .contrast(1.1)
///     .saturation(1.0);
/// assert_eq!(options.shadow_threshold, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneOptions {
    /// Contrast multiplier around the 128 midpoint (1.0 = no change).
    pub contrast: f64,

    /// Saturation multiplier relative to luma (1.0 = no change).
    pub saturation: f64,

    /// Luma below which a sample is compressed toward black.
    pub shadow_threshold: f64,

    /// Luma above which a sample is compressed toward white.
    pub highlight_threshold: f64,

    /// Fraction of the distance to black (or white) that survives compression.
    pub compression: f64,

    /// Minimum alpha for a sample to count as opaque.
    pub opaque_cutoff: u8,
}

impl Default for ToneOptions {
    fn default() -> Self {
        Self {
            contrast: 1.25,
            saturation: 1.2,
            shadow_threshold: 100.0,
            highlight_threshold: 155.0,
            compression: 0.4,
            opaque_cutoff: 250,
        }
    }
}

impl ToneOptions {
    /// Create options with the default tone curve.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that leave every opaque sample unchanged.
    pub fn identity() -> Self {
        Self {
            contrast: 1.0,
            saturation: 1.0,
            shadow_threshold: f64::NEG_INFINITY,
            highlight_threshold: f64::INFINITY,
            ..Self::default()
        }
    }

    #[inline]
    pub fn contrast(mut self, factor: f64) -> Self {
        self.contrast = factor;
        self
    }

    #[inline]
    pub fn saturation(mut self, factor: f64) -> Self {
        self.saturation = factor;
        self
    }

    /// Set the shadow and highlight luma thresholds.
    #[inline]
    pub fn thresholds(mut self, shadow: f64, highlight: f64) -> Self {
        self.shadow_threshold = shadow;
        self.highlight_threshold = highlight;
        self
    }

    #[inline]
    pub fn compression(mut self, factor: f64) -> Self {
        self.compression = factor;
        self
    }

    #[inline]
    pub fn opaque_cutoff(mut self, alpha: u8) -> Self {
        self.opaque_cutoff = alpha;
        self
    }
}
