//! Field discretization: threshold bucketing and normalized binning

use ndarray::Array2;
use num_traits::Float;

/// How a design's continuous field maps to palette indices
#[derive(Clone, Copy, Debug)]
pub enum QuantizePolicy {
    /// Ascending cutoffs supplied by the design; a value's bucket is the
    /// count of cutoffs it reaches
    Fixed(&'static [f64]),
    /// Min-max normalize the field, then split into equal-width bins
    Normalized,
}

/// Bucket a value against ascending cutoffs
///
/// Values below the first cutoff map to index 0; values at or above the
/// last map to `cutoffs.len()`.
pub fn bucket(value: f64, cutoffs: &[f64]) -> u8 {
    let mut index = 0u8;
    for cutoff in cutoffs {
        if value < *cutoff {
            break;
        }
        index += 1;
    }
    index
}

/// Select `count` evenly spaced cutoffs from a design's canonical list
///
/// Keeps the interior of the list so reduced color counts still split the
/// field around its central values.
pub fn select_cutoffs(cutoffs: &[f64], count: usize) -> Vec<f64> {
    if count >= cutoffs.len() {
        return cutoffs.to_vec();
    }
    (1..=count)
        .filter_map(|i| cutoffs.get(i * cutoffs.len() / (count + 1)).copied())
        .collect()
}

/// Normalize a field to `[0, 1]` in place
///
/// A constant field maps to all zeros rather than dividing by zero.
pub fn normalize_in_place<F: Float>(field: &mut Array2<F>) {
    let mut min = F::infinity();
    let mut max = F::neg_infinity();
    for value in field.iter() {
        min = min.min(*value);
        max = max.max(*value);
    }
    let span = max - min;
    if span <= F::zero() {
        field.fill(F::zero());
        return;
    }
    field.mapv_inplace(|value| (value - min) / span);
}

/// Quantize a wedge field into `color_count` palette indices
///
/// Both policies are stable: the same field always produces the same
/// indices, and every index in `[0, color_count)` is reachable.
pub fn quantize_wedge(
    field: &Array2<f64>,
    policy: QuantizePolicy,
    color_count: usize,
) -> Array2<u8> {
    match policy {
        QuantizePolicy::Fixed(canonical) => {
            let cutoffs = select_cutoffs(canonical, color_count.saturating_sub(1));
            field.mapv(|value| bucket(value, &cutoffs))
        }
        QuantizePolicy::Normalized => {
            let mut normalized = field.clone();
            normalize_in_place(&mut normalized);
            let cutoffs: Vec<f64> = (1..color_count)
                .map(|i| i as f64 / color_count as f64)
                .collect();
            normalized.mapv(|value| bucket(value, &cutoffs))
        }
    }
}
