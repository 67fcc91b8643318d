//! Kaleidoscopic cross-stitch chart generator with eight-way dihedral symmetry
//!
//! The crate evaluates seeded scalar-field designs over one octant of a fixed
//! 35×35 grid, quantizes the field into a small palette, optionally smooths
//! it, and folds the octant back into a fully symmetric chart that renders to
//! pixel images and CSV exports.

#![forbid(unsafe_code)]

/// Generation pipeline from request parameters to a finished index grid
pub mod chart;
/// Seeded scalar-field designs and the design registry
pub mod field;
/// Input/output operations and error handling
pub mod io;
/// Quantization and smoothing utilities
pub mod math;
/// Static color palette registry
pub mod palette;
/// Chart and animation rendering
pub mod render;
/// Octant folding for the dihedral symmetry group
pub mod symmetry;

pub use chart::pipeline::{GenerationRequest, generate_indices, smoothing_sequence};
pub use io::error::{ChartError, Result};
pub use render::chart::{RenderOptions, render_image};
pub use symmetry::grid::IndexGrid;

/// Registered design names in display order
pub fn list_designs() -> Vec<&'static str> {
    field::designs::names()
}

/// Registered palette names in display order
pub fn list_palettes() -> Vec<&'static str> {
    palette::names()
}
