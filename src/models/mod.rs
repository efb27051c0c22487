pub mod config;
pub mod grid_request;

pub use config::{AppConfig, GridConfig};
pub use grid_request::{GridQuery, GridRequest};
