//! Animated GIF export of successive smoothing passes
//!
//! One frame per pipeline stage, starting from the unsmoothed chart, with
//! the final state held longer for visibility.

use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame};

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{ChartError, Result, file_system_error, invalid_parameter};
use crate::render::chart::{RenderOptions, render_chart};
use crate::symmetry::grid::IndexGrid;

/// Encode the smoothing stages as an animated GIF at `path`
///
/// Delays below the minimum that GIF viewers reliably honor are raised to
/// that minimum.
///
/// # Errors
///
/// Returns an error if:
/// - `grids` is empty
/// - A stage fails to render
/// - File system operations or GIF encoding fail
pub fn export_smoothing_gif(
    grids: &[IndexGrid],
    colors: &[[u8; 3]],
    cell: u32,
    frame_delay_ms: u32,
    path: &Path,
) -> Result<()> {
    if grids.is_empty() {
        return Err(invalid_parameter(
            "grids",
            &0,
            &"no smoothing stages to animate",
        ));
    }

    let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let options = RenderOptions { cell, gridline: 0 };

    let mut frames = Vec::with_capacity(grids.len() + 1);
    for grid in grids {
        let stage = render_chart(grid, colors, options)?;
        let rgba = image::DynamicImage::ImageRgb8(stage).to_rgba8();
        frames.push(Frame::from_parts(
            rgba,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ));
    }

    // Hold the settled chart before the loop restarts
    if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
        frames.push(Frame::from_parts(
            last,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms * 4, 1),
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    let file = std::fs::File::create(path).map_err(|e| file_system_error(path, "create file", e))?;

    let mut encoder = GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| ChartError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
