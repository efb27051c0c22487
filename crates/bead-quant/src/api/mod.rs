//! Public API for the bead-quant crate.
//!
//! This module provides the high-level API: the [`GridBuilder`] and the
//! [`GridError`] type shared by generation and editing.

mod builder;
mod error;

pub use builder::{GridBuilder, DEFAULT_GRID_SIZE, MAX_SURFACE_SIZE};
pub use error::GridError;
