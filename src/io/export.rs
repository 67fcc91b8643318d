//! Chart bundle export: PNG images and CSV tables

use std::fmt::Write as _;
use std::path::Path;

use image::RgbImage;

use crate::io::error::{ChartError, Result, file_system_error};
use crate::palette::Palette;
use crate::symmetry::grid::IndexGrid;

/// Save a rendered image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and saved.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    img.save(path).map_err(|e| ChartError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the grid's palette indices as CSV with coordinate headers
///
/// First row and column carry cell coordinates, matching the printable
/// chart layout.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_indices_csv(grid: &IndexGrid, path: &Path) -> Result<()> {
    let mut csv = String::from("y\\x");
    for x in 0..grid.size() {
        let _ = write!(csv, ",{x}");
    }
    csv.push('\n');
    for y in 0..grid.size() {
        let _ = write!(csv, "{y}");
        for x in 0..grid.size() {
            let _ = write!(csv, ",{}", grid.get(x, y).unwrap_or(0));
        }
        csv.push('\n');
    }
    write_text(path, &csv)
}

/// Write the active palette slice as an index→hex CSV
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_palette_csv(palette: &Palette, color_count: usize, path: &Path) -> Result<()> {
    let mut csv = String::from("index,hex\n");
    for (index, hex) in palette.hex.iter().take(color_count).enumerate() {
        let _ = writeln!(csv, "{index},{hex}");
    }
    write_text(path, &csv)
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    std::fs::write(path, contents).map_err(|e| file_system_error(path, "write file", e))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    Ok(())
}
