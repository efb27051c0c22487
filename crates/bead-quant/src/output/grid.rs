//! The bead grid and its cells.
//!
//! [`Grid`] is the canonical output of the pipeline: a square, row-major
//! array of [`GridCell`]s indexed `[row][col]`. Renderers rely on that
//! ordering, so every constructor enforces it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::GridError;
use crate::palette::{PaletteEntry, Vendor, VendorCodes};

/// Hex value of the empty (background) cell.
pub const EMPTY_HEX: &str = "transparent";
/// Hex value of the placeholder cell used when nothing could be matched.
pub const FALLBACK_HEX: &str = "#FFFFFF";
/// Code shown for every vendor on the placeholder cell.
pub const FALLBACK_CODE: &str = "-";

/// One bead position: the color to place and every vendor's code for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub hex: String,
    pub codes: VendorCodes,
}

impl GridCell {
    /// The background cell: no bead goes here.
    pub fn empty() -> Self {
        Self {
            hex: EMPTY_HEX.to_string(),
            codes: VendorCodes::uniform(""),
        }
    }

    /// White placeholder with `"-"` for every vendor.
    pub fn fallback() -> Self {
        Self {
            hex: FALLBACK_HEX.to_string(),
            codes: VendorCodes::uniform(FALLBACK_CODE),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hex == EMPTY_HEX
    }

    #[inline]
    pub fn code(&self, vendor: Vendor) -> Option<&str> {
        self.codes.get(vendor)
    }
}

impl From<&PaletteEntry> for GridCell {
    fn from(entry: &PaletteEntry) -> Self {
        Self {
            hex: entry.hex.clone(),
            codes: entry.codes.clone(),
        }
    }
}

/// A manual change to one cell, applied outside the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum GridEdit {
    /// Place the palette color `hex` at `(row, col)`.
    Paint { row: usize, col: usize, hex: String },
    /// Clear `(row, col)` back to an empty cell.
    Erase { row: usize, col: usize },
}

/// How many beads of one color a grid needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeadCount {
    pub hex: String,
    pub codes: VendorCodes,
    pub count: usize,
}

/// A square grid of cells, row-major.
///
/// Serializes as `{"rows": [[cell, ...], ...]}`. Deserializing validates the
/// shape, so a `Grid` is always square with at least one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRows")]
pub struct Grid {
    rows: Vec<Vec<GridCell>>,
}

#[derive(Deserialize)]
struct GridRows {
    rows: Vec<Vec<GridCell>>,
}

impl TryFrom<GridRows> for Grid {
    type Error = GridError;

    fn try_from(raw: GridRows) -> Result<Self, Self::Error> {
        Grid::from_rows(raw.rows)
    }
}

impl Grid {
    /// Build a grid from rows, checking that they form a non-empty square.
    pub fn from_rows(rows: Vec<Vec<GridCell>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::InvalidShape("grid has no rows".to_string()));
        }
        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(GridError::InvalidShape(format!(
                "row {index} has {} cells, expected {size}",
                row.len()
            )));
        }
        Ok(Self { rows })
    }

    /// Build a `size`×`size` grid from cells in row-major order.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == size * size`.
    pub(crate) fn from_row_major(cells: Vec<GridCell>, size: usize) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        let mut cells = cells.into_iter();
        let rows = (0..size)
            .map(|_| cells.by_ref().take(size).collect())
            .collect();
        Self { rows }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<GridCell>> {
        self.rows
    }

    /// The cell at `(row, col)`, if inside the grid. This is the eyedropper.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Iterate `(row, col, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &GridCell)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, cell)| (y, x, cell)))
    }

    /// Return a new grid with `edit` applied.
    ///
    /// Painting looks `hex` up in `palette` (case-insensitive, `#` optional)
    /// and stores the entry's own hex and codes, so painted cells follow the
    /// same invariants as generated ones.
    ///
    /// # Errors
    ///
    /// - [`GridError::OutOfBounds`] if the position is outside the grid
    /// - [`GridError::UnknownColor`] if `hex` is not in `palette`
    pub fn apply_edit(&self, edit: &GridEdit, palette: &[PaletteEntry]) -> Result<Grid, GridError> {
        let (row, col, cell) = match edit {
            GridEdit::Paint { row, col, hex } => {
                let entry = palette
                    .iter()
                    .find(|e| e.matches_hex(hex))
                    .ok_or_else(|| GridError::UnknownColor(hex.clone()))?;
                (*row, *col, GridCell::from(entry))
            }
            GridEdit::Erase { row, col } => (*row, *col, GridCell::empty()),
        };

        let size = self.size();
        if row >= size || col >= size {
            return Err(GridError::OutOfBounds { row, col, size });
        }

        let mut next = self.clone();
        next.rows[row][col] = cell;
        Ok(next)
    }

    /// Rebuild every cell from `palette`, for grids that came from outside.
    ///
    /// Empty and placeholder cells are kept. Any other cell must name a
    /// palette color; it is replaced by that entry's hex and codes.
    ///
    /// # Errors
    ///
    /// [`GridError::UnknownColor`] for the first cell whose hex is not in
    /// `palette`.
    pub fn conform_to_palette(&self, palette: &[PaletteEntry]) -> Result<Grid, GridError> {
        let fallback = GridCell::fallback();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            return Ok(GridCell::empty());
                        }
                        match palette.iter().find(|e| e.matches_hex(&cell.hex)) {
                            Some(entry) => Ok(GridCell::from(entry)),
                            None if *cell == fallback => Ok(fallback.clone()),
                            None => Err(GridError::UnknownColor(cell.hex.clone())),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Grid { rows })
    }

    /// Count the beads needed per color, most used first.
    ///
    /// Empty cells are not counted. Colors used equally often keep the order
    /// in which they first appear in the grid.
    pub fn bead_counts(&self) -> Vec<BeadCount> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<BeadCount> = Vec::new();

        for (_, _, cell) in self.cells().filter(|(_, _, c)| !c.is_empty()) {
            match index.get(cell.hex.as_str()) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(cell.hex.as_str(), counts.len());
                    counts.push(BeadCount {
                        hex: cell.hex.clone(),
                        codes: cell.codes.clone(),
                        count: 1,
                    });
                }
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}
