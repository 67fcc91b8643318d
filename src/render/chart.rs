//! Block rendering of index grids into pixel images

use image::{Rgb, RgbImage};

use crate::io::configuration::{
    DEFAULT_CELL, DEFAULT_GRIDLINE, GRIDLINE_COLOR, MAX_CELL, MAX_GRIDLINE, MIN_PREVIEW_CELL,
};
use crate::io::error::{ChartError, Result};
use crate::palette;
use crate::symmetry::grid::IndexGrid;

/// Pixel geometry for chart rendering
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Cell block size in pixels
    pub cell: u32,
    /// Gridline thickness in pixels (0 draws no gridlines)
    pub gridline: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell: DEFAULT_CELL,
            gridline: DEFAULT_GRIDLINE,
        }
    }
}

impl RenderOptions {
    fn validate(self) -> Result<()> {
        if self.cell == 0 {
            return Err(ChartError::InvalidDimensions {
                cell: self.cell,
                gridline: self.gridline,
                reason: "cell size must be at least 1 pixel",
            });
        }
        if self.cell > MAX_CELL {
            return Err(ChartError::InvalidDimensions {
                cell: self.cell,
                gridline: self.gridline,
                reason: "cell size exceeds the maximum",
            });
        }
        if self.gridline > MAX_GRIDLINE {
            return Err(ChartError::InvalidDimensions {
                cell: self.cell,
                gridline: self.gridline,
                reason: "gridline thickness exceeds the maximum",
            });
        }
        Ok(())
    }
}

/// Render a grid using a registered palette
///
/// # Errors
///
/// Returns `UnknownPalette` for an unregistered palette name, plus the
/// failure modes of [`render_chart`].
pub fn render_image(grid: &IndexGrid, palette_name: &str, options: RenderOptions) -> Result<RgbImage> {
    let palette = palette::find(palette_name).ok_or_else(|| ChartError::UnknownPalette {
        name: palette_name.to_string(),
    })?;
    render_chart(grid, &palette.colors(), options)
}

/// Render a grid with explicit colors
///
/// The image is `(n*cell + (n+1)*gridline)` pixels on a side; gridline gaps
/// keep a fixed neutral color. Pure function of its inputs.
///
/// # Errors
///
/// Returns `InvalidDimensions` for out-of-range pixel geometry and
/// `PaletteBound` if the grid holds an index the color list cannot cover.
pub fn render_chart(grid: &IndexGrid, colors: &[[u8; 3]], options: RenderOptions) -> Result<RgbImage> {
    options.validate()?;
    let max_index = grid.max_index() as usize;
    if max_index >= colors.len() {
        return Err(ChartError::PaletteBound {
            index: max_index,
            colors: colors.len(),
        });
    }

    let n = grid.size() as u32;
    let side = n * options.cell + (n + 1) * options.gridline;
    let mut img = RgbImage::from_pixel(side, side, Rgb(GRIDLINE_COLOR));

    for y in 0..grid.size() {
        for x in 0..grid.size() {
            let index = grid.get(x, y).unwrap_or(0) as usize;
            let color = colors.get(index).copied().unwrap_or(GRIDLINE_COLOR);
            let x0 = x as u32 * options.cell + (x as u32 + 1) * options.gridline;
            let y0 = y as u32 * options.cell + (y as u32 + 1) * options.gridline;
            for py in 0..options.cell {
                for px in 0..options.cell {
                    img.put_pixel(x0 + px, y0 + py, Rgb(color));
                }
            }
        }
    }
    Ok(img)
}

/// Render a gridline-free preview at half the chart cell size
///
/// # Errors
///
/// Same failure modes as [`render_chart`].
pub fn render_preview(grid: &IndexGrid, colors: &[[u8; 3]], chart_cell: u32) -> Result<RgbImage> {
    let options = RenderOptions {
        cell: (chart_cell / 2).max(MIN_PREVIEW_CELL),
        gridline: 0,
    };
    render_chart(grid, colors, options)
}
