//! HSL representation used by the palette style filters.

use super::Rgb;

/// A color in HSL with integer components.
///
/// - `h`: hue in degrees, 0..=360
/// - `s`: saturation in percent, 0..=100
/// - `l`: lightness in percent, 0..=100
///
/// Each channel is rounded to the nearest integer, so values sitting on a
/// filter threshold compare the same way every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64 / 255.0;
        let g = rgb.g as f64 / 255.0;
        let b = rgb.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let (h, s) = if delta == 0.0 {
            (0.0, 0.0)
        } else {
            let s = delta / (1.0 - (2.0 * l - 1.0).abs());
            let h = if max == r {
                ((g - b) / delta).rem_euclid(6.0)
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (h * 60.0, s)
        };

        Self {
            h: h.round() as u16,
            s: (s * 100.0).round().clamp(0.0, 100.0) as u8,
            l: (l * 100.0).round().clamp(0.0, 100.0) as u8,
        }
    }
}
