pub mod grid;
pub mod palette;

pub use grid::{handle_edit, handle_generate, EditRequest, EditResponse, GridResponse};
pub use grid::{__path_handle_edit, __path_handle_generate};
pub use palette::{handle_palette, PaletteResponse, __path_handle_palette};
