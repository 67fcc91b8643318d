//! Octant folding and grid expansion for eight-way dihedral symmetry
//!
//! This module contains the coordinate engine:
//! - Folding any cell offset into the fundamental octant
//! - Expanding a computed wedge back into a full symmetric grid

/// Canonical octant fold and orbit enumeration
pub mod fold;
/// Index grid type and per-cell wedge expansion
pub mod grid;

pub use grid::IndexGrid;
