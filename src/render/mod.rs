//! Rendering of finished index grids
//!
//! - Chart and preview images as solid-color blocks with optional gridlines
//! - Animated GIF of successive smoothing passes

/// Smoothing-pass GIF encoding
pub mod animation;
/// Block renderer for charts and previews
pub mod chart;

pub use chart::{RenderOptions, render_chart, render_image, render_preview};
