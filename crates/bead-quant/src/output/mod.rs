//! Output types for the bead pipeline.
//!
//! [`Grid`] is the canonical result of [`GridBuilder::build`](crate::GridBuilder::build).
//! It can be edited cell by cell ([`Grid::apply_edit`]), summarized into a
//! shopping list ([`Grid::bead_counts`]) and rendered:
//!
//! - **Chart** ([`render_chart`]): one vendor's codes laid out as text
//! - **Preview** ([`render_preview`]): an RGBA image with one square per bead

mod grid;
mod render;

pub use grid::{BeadCount, Grid, GridCell, GridEdit, EMPTY_HEX, FALLBACK_CODE, FALLBACK_HEX};
pub use render::{render_chart, render_preview, CHART_EMPTY, CHART_MISSING, MAX_PREVIEW_SIDE};
