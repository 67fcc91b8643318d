//! Static color palette registry
//!
//! Palettes are process-wide read-only data; index 0 is always the
//! background color.

/// Palette data and lookup
pub mod registry;

pub use registry::{Palette, find, names};
