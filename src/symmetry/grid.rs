//! Index grid construction by per-cell wedge lookup
//!
//! Expansion never concatenates mirrored blocks. Each output cell folds its
//! own coordinate and reads the wedge, which makes the symmetry invariant
//! hold by construction and keeps the shared center row/column from being
//! duplicated.

use ndarray::Array2;

use crate::io::configuration::GRID_SIZE;
use crate::symmetry::fold::fold_cell;

/// A finished square chart of palette indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGrid {
    cells: Array2<u8>,
}

impl IndexGrid {
    /// Expand a quantized wedge into the full symmetric grid
    pub fn from_wedge(wedge: &Array2<u8>) -> Self {
        let mut cells = Array2::zeros((GRID_SIZE, GRID_SIZE));
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let (fx, fy) = fold_cell(x, y);
                let value = wedge.get([fy, fx]).copied().unwrap_or(0);
                if let Some(cell) = cells.get_mut([y, x]) {
                    *cell = value;
                }
            }
        }
        Self { cells }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Palette index at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.cells.get([y, x]).copied()
    }

    /// Highest palette index present in the grid
    pub fn max_index(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Row-major view of the underlying cells
    pub const fn cells(&self) -> &Array2<u8> {
        &self.cells
    }

    /// Fraction of horizontally and vertically adjacent cell pairs that agree
    ///
    /// Used as the contiguity measure: majority smoothing should never
    /// decrease it.
    pub fn neighbor_agreement(&self) -> f64 {
        let mut pairs = 0usize;
        let mut agreeing = 0usize;
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let here = self.get(x, y);
                if x + 1 < GRID_SIZE {
                    pairs += 1;
                    if here == self.get(x + 1, y) {
                        agreeing += 1;
                    }
                }
                if y + 1 < GRID_SIZE {
                    pairs += 1;
                    if here == self.get(x, y + 1) {
                        agreeing += 1;
                    }
                }
            }
        }
        if pairs == 0 {
            return 1.0;
        }
        agreeing as f64 / pairs as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::configuration::WEDGE_SIZE;

    #[test]
    fn test_expansion_is_symmetric_for_arbitrary_wedge() {
        // Wedge content only matters along fx >= fy; fill everything anyway
        let mut wedge = Array2::zeros((WEDGE_SIZE, WEDGE_SIZE));
        for ((fy, fx), cell) in wedge.indexed_iter_mut() {
            *cell = ((fx * 3 + fy * 5) % 7) as u8;
        }
        let grid = IndexGrid::from_wedge(&wedge);
        let last = GRID_SIZE - 1;
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let v = grid.get(x, y);
                assert_eq!(v, grid.get(last - x, y));
                assert_eq!(v, grid.get(x, last - y));
            }
        }
    }

    #[test]
    fn test_center_cell_reads_wedge_origin() {
        let mut wedge = Array2::zeros((WEDGE_SIZE, WEDGE_SIZE));
        if let Some(cell) = wedge.get_mut([0, 0]) {
            *cell = 5;
        }
        let grid = IndexGrid::from_wedge(&wedge);
        assert_eq!(grid.get(17, 17), Some(5));
    }
}
