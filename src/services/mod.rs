pub mod grid_service;
pub mod palette_store;

pub use grid_service::GridService;
pub use palette_store::PaletteStore;
