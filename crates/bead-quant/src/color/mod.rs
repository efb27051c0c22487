//! Color types
//!
//! - [`Rgb`]: 8-bit channels, the representation palettes and samples share.
//! - [`Hsl`]: integer hue/saturation/lightness, used only to classify palette
//!   entries for style filtering.
//!
//! # Example
//!
//! ```
//! use bead_quant::{Hsl, Rgb};
//!
//! let rose: Rgb = "#FF0080".parse().unwrap();
//! let hsl = Hsl::from(rose);
//! assert_eq!((hsl.s, hsl.l), (100, 50));
//! ```

mod hsl;
mod rgb;

pub use hsl::Hsl;
pub use rgb::Rgb;
