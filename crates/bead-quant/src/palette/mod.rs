//! Bead palette types and operations
//!
//! - [`load_palette`] / [`parse_palette_json`]: build entries from a hex →
//!   vendor-code table, skipping unparsable keys
//! - [`filter_palette`]: narrow the palette by [`FilterStyle`]
//! - [`find_nearest_color`]: exhaustive nearest-neighbor match by squared RGB
//!   distance

mod entry;
mod error;
mod filter;
mod loader;
mod matcher;
mod vendor;

pub use entry::PaletteEntry;
pub use error::{PaletteError, ParseColorError};
pub use filter::{filter_palette, FilterStyle};
pub use loader::{load_palette, parse_palette_json};
pub use matcher::{find_nearest_color, nearest_entry};
pub use vendor::{Vendor, VendorCodes};
