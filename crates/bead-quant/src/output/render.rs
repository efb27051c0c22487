//! Chart and preview rendering for a finished grid.

use image::{Rgba, RgbaImage};

use super::Grid;
use crate::api::GridError;
use crate::color::Rgb;
use crate::palette::Vendor;

/// Label printed for an empty cell in a chart.
pub const CHART_EMPTY: &str = ".";
/// Label printed when a cell carries no code for the chosen vendor.
pub const CHART_MISSING: &str = "?";
/// Largest preview side length in pixels.
pub const MAX_PREVIEW_SIDE: u32 = 8192;

/// Render `grid` as a plain-text bead chart using `vendor`'s codes.
///
/// One line per row, columns padded to the widest label.
///
/// ```
/// use bead_quant::{render_chart, Grid, GridCell, Vendor, VendorCodes};
///
/// let red = GridCell { hex: "#FF0000".into(), codes: VendorCodes::uniform("F5") };
/// let grid = Grid::from_rows(vec![
///     vec![red.clone(), GridCell::empty()],
///     vec![GridCell::empty(), red],
/// ]).unwrap();
///
/// assert_eq!(render_chart(&grid, Vendor::Mard), "F5 .\n.  F5\n");
/// ```
pub fn render_chart(grid: &Grid, vendor: Vendor) -> String {
    let labels: Vec<Vec<&str>> = grid
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        CHART_EMPTY
                    } else {
                        cell.code(vendor).filter(|c| !c.is_empty()).unwrap_or(CHART_MISSING)
                    }
                })
                .collect()
        })
        .collect();

    let width = labels
        .iter()
        .flatten()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in &labels {
        let line = row
            .iter()
            .map(|label| format!("{label:<width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render `grid` as an image with each cell drawn as a `cell_px` square.
///
/// Empty cells stay fully transparent. A `cell_px` of zero is treated as one.
///
/// # Errors
///
/// Returns [`GridError::PreviewTooLarge`] if the image side would exceed
/// [`MAX_PREVIEW_SIDE`].
pub fn render_preview(grid: &Grid, cell_px: u32) -> Result<RgbaImage, GridError> {
    let cell_px = cell_px.max(1);
    let side = u32::try_from(grid.size())
        .ok()
        .and_then(|size| size.checked_mul(cell_px))
        .filter(|&side| side <= MAX_PREVIEW_SIDE)
        .ok_or(GridError::PreviewTooLarge {
            size: grid.size(),
            cell_px,
        })?;
    let mut image = RgbaImage::new(side, side);

    for (row, col, cell) in grid.cells() {
        if cell.is_empty() {
            continue;
        }
        let Ok(rgb) = cell.hex.parse::<Rgb>() else {
            tracing::debug!(hex = %cell.hex, row, col, "Skipping cell with unparsable color");
            continue;
        };
        let pixel = Rgba([rgb.r, rgb.g, rgb.b, 255]);

        let x0 = col as u32 * cell_px;
        let y0 = row as u32 * cell_px;
        for y in y0..y0 + cell_px {
            for x in x0..x0 + cell_px {
                image.put_pixel(x, y, pixel);
            }
        }
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::GridCell;
    use crate::palette::VendorCodes;

    fn bead(hex: &str, mard: &str) -> GridCell {
        GridCell {
            hex: hex.to_string(),
            codes: VendorCodes::new().with(Vendor::Mard, mard),
        }
    }

    #[test]
    fn test_chart_pads_columns() {
        let grid = Grid::from_rows(vec![
            vec![bead("#000000", "H7"), bead("#FFFFFF", "A10")],
            vec![GridCell::empty(), bead("#000000", "H7")],
        ])
        .unwrap();

        assert_eq!(render_chart(&grid, Vendor::Mard), "H7  A10\n.   H7\n");
    }

    #[test]
    fn test_chart_marks_missing_codes() {
        let grid = Grid::from_rows(vec![vec![bead("#000000", "H7")]]).unwrap();
        assert_eq!(render_chart(&grid, Vendor::Coco), "?\n");
    }

    #[test]
    fn test_chart_fallback_cells_show_dash() {
        let grid = Grid::from_rows(vec![vec![GridCell::fallback()]]).unwrap();
        assert_eq!(render_chart(&grid, Vendor::Manman), "-\n");
    }

    #[test]
    fn test_preview_scales_cells() {
        let grid = Grid::from_rows(vec![
            vec![bead("#FF0000", "F5"), GridCell::empty()],
            vec![GridCell::empty(), bead("#0000FF", "C6")],
        ])
        .unwrap();

        let image = render_preview(&grid, 3).unwrap();
        assert_eq!(image.dimensions(), (6, 6));
        assert_eq!(image.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(3, 0).0, [0, 0, 0, 0]);
        assert_eq!(image.get_pixel(5, 5).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_preview_zero_cell_size() {
        let grid = Grid::from_rows(vec![vec![GridCell::fallback()]]).unwrap();
        assert_eq!(render_preview(&grid, 0).unwrap().dimensions(), (1, 1));
    }

    #[test]
    fn test_preview_side_limit() {
        let row = vec![GridCell::fallback(); 64];
        let grid = Grid::from_rows(vec![row; 64]).unwrap();

        assert_eq!(render_preview(&grid, 16).unwrap().width(), 1024);

        let err = render_preview(&grid, MAX_PREVIEW_SIDE / 64 + 1).unwrap_err();
        assert!(matches!(err, GridError::PreviewTooLarge { size: 64, cell_px: 129 }));

        // 64 * 100_000_000 does not fit in u32
        assert!(matches!(
            render_preview(&grid, 100_000_000),
            Err(GridError::PreviewTooLarge { .. })
        ));
    }
}
