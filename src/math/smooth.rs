//! Majority-vote smoothing for quantized wedges
//!
//! Smoothing runs on the wedge before folding, so the symmetry of the
//! expanded grid can never be broken by a filter window crossing a fold
//! seam.

use ndarray::Array2;

use crate::io::configuration::MAX_COLOR_COUNT;

/// Replace each cell with the most frequent index in its 3×3 neighborhood
///
/// The window is clipped at the boundary (no wraparound). Ties prefer the
/// lowest index so the filter stays deterministic.
pub fn majority_pass(wedge: &Array2<u8>) -> Array2<u8> {
    let (rows, cols) = wedge.dim();
    let mut out = Array2::zeros((rows, cols));
    for row in 0..rows {
        for col in 0..cols {
            let row_span = row.saturating_sub(1)..(row + 2).min(rows);
            let col_span = col.saturating_sub(1)..(col + 2).min(cols);

            let mut counts = [0u8; MAX_COLOR_COUNT];
            for r in row_span {
                for c in col_span.clone() {
                    let index = wedge.get([r, c]).copied().unwrap_or(0) as usize;
                    if let Some(slot) = counts.get_mut(index) {
                        *slot += 1;
                    }
                }
            }

            let mut winner = 0u8;
            let mut winner_count = 0u8;
            for (index, &count) in counts.iter().enumerate() {
                if count > winner_count {
                    winner = index as u8;
                    winner_count = count;
                }
            }
            if let Some(cell) = out.get_mut([row, col]) {
                *cell = winner;
            }
        }
    }
    out
}

/// Apply `passes` rounds of majority filtering
///
/// Zero passes returns the wedge unchanged.
pub fn smooth_wedge(wedge: &Array2<u8>, passes: usize) -> Array2<u8> {
    let mut current = wedge.clone();
    for _ in 0..passes {
        current = majority_pass(&current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_wedge_is_unchanged() {
        let wedge = Array2::from_elem((6, 6), 4u8);
        assert_eq!(majority_pass(&wedge), wedge);
    }

    #[test]
    fn test_single_outlier_is_absorbed() {
        let mut wedge = Array2::from_elem((5, 5), 2u8);
        if let Some(cell) = wedge.get_mut([2, 2]) {
            *cell = 6;
        }
        let smoothed = majority_pass(&wedge);
        assert_eq!(smoothed.get([2, 2]).copied(), Some(2));
    }

    #[test]
    fn test_tie_prefers_lowest_index() {
        // Every window sees the full 2x2 block, a 2-2 split between 3 and 5
        let wedge = Array2::from_shape_fn((2, 2), |(r, _)| if r == 0 { 3u8 } else { 5u8 });
        let smoothed = majority_pass(&wedge);
        assert!(smoothed.iter().all(|v| *v == 3));
    }

    #[test]
    fn test_zero_passes_is_noop() {
        let wedge = Array2::from_shape_fn((4, 4), |(r, c)| ((r + c) % 3) as u8);
        assert_eq!(smooth_wedge(&wedge, 0), wedge);
    }

    #[test]
    fn test_transpose_symmetry_is_preserved() {
        let mut wedge = Array2::zeros((7, 7));
        for ((r, c), cell) in wedge.indexed_iter_mut() {
            let (hi, lo) = if r > c { (r, c) } else { (c, r) };
            *cell = ((hi * 2 + lo) % 5) as u8;
        }
        let smoothed = majority_pass(&wedge);
        for r in 0..7 {
            for c in 0..7 {
                assert_eq!(smoothed.get([r, c]), smoothed.get([c, r]));
            }
        }
    }
}
