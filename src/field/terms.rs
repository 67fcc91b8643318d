//! Seeded field terms shared by every design

use ndarray::Array2;
use rand::{Rng, rngs::StdRng};

use crate::io::configuration::{EDGE_RADIUS, LINE_BIAS_SCALE, WEDGE_SIZE};

/// Euclidean distance of a folded cell from the grid center
///
/// The epsilon keeps downstream divisions and angles away from the exact
/// origin.
pub fn radial_distance(fx: f64, fy: f64) -> f64 {
    fx.hypot(fy) + 1e-6
}

/// Polar angle of a folded cell
pub fn polar_angle(fx: f64, fy: f64) -> f64 {
    fy.atan2(fx + 1e-6)
}

/// Fill a wedge buffer by evaluating `f` over folded coordinates
///
/// Only the `fx >= fy` octant is evaluated; the mirror cell receives the
/// same value, so the buffer is diagonal-symmetric by construction.
pub fn fill_wedge(f: impl Fn(usize, usize) -> f64) -> Array2<f64> {
    let mut wedge = Array2::zeros((WEDGE_SIZE, WEDGE_SIZE));
    for fy in 0..WEDGE_SIZE {
        for fx in fy..WEDGE_SIZE {
            let value = f(fx, fy);
            if let Some(cell) = wedge.get_mut([fy, fx]) {
                *cell = value;
            }
            if let Some(cell) = wedge.get_mut([fx, fy]) {
                *cell = value;
            }
        }
    }
    wedge
}

/// A Gaussian bump at a seeded center inside the octant
#[derive(Debug, Clone, Copy)]
pub struct Blob {
    center_x: f64,
    center_y: f64,
    amplitude: f64,
    sigma: f64,
}

impl Blob {
    /// Draw a blob with its center in the fundamental octant
    pub fn draw(rng: &mut StdRng, amplitude_low: f64, amplitude_high: f64) -> Self {
        let center_x = rng.random_range(0.0..=EDGE_RADIUS as f64);
        let center_y = rng.random_range(0.0..=center_x);
        Self {
            center_x,
            center_y,
            amplitude: rng.random_range(amplitude_low..amplitude_high),
            sigma: rng.random_range(1.8..4.5),
        }
    }

    /// Evaluate the bump at a folded cell
    pub fn eval(&self, fx: f64, fy: f64) -> f64 {
        let dx = fx - self.center_x;
        let dy = fy - self.center_y;
        self.amplitude * (-(dx * dx + dy * dy) / (2.0 * self.sigma * self.sigma)).exp()
    }
}

/// A sum of seeded Gaussian bumps giving large-scale organic structure
#[derive(Debug, Clone)]
pub struct BlobField {
    blobs: Vec<Blob>,
}

impl BlobField {
    /// Draw `count` blobs with amplitudes in the given range
    pub fn draw(rng: &mut StdRng, count: usize, amplitude_low: f64, amplitude_high: f64) -> Self {
        let blobs = (0..count)
            .map(|_| Blob::draw(rng, amplitude_low, amplitude_high))
            .collect();
        Self { blobs }
    }

    /// Summed bump contribution at a folded cell
    pub fn eval(&self, fx: f64, fy: f64) -> f64 {
        self.blobs.iter().map(|blob| blob.eval(fx, fy)).sum()
    }
}

/// Periodic ring/spoke banding whose amplitude follows the line-bias knob
#[derive(Debug, Clone, Copy)]
pub struct BandTerm {
    ring_freq: f64,
    ring_phase: f64,
    spoke_mult: f64,
    spoke_phase: f64,
    amplitude: f64,
}

impl BandTerm {
    /// Draw band parameters from the design's random stream
    pub fn draw(rng: &mut StdRng, line_bias: f64) -> Self {
        Self {
            ring_freq: rng.random_range(0.7..1.3),
            ring_phase: rng.random_range(0.0..std::f64::consts::TAU),
            spoke_mult: rng.random_range(4..=8) as f64,
            spoke_phase: rng.random_range(0.0..std::f64::consts::TAU),
            amplitude: line_bias * LINE_BIAS_SCALE,
        }
    }

    /// Banding contribution at the given radius and angle
    pub fn eval(&self, r: f64, a: f64) -> f64 {
        self.amplitude
            * (r.mul_add(self.ring_freq, self.ring_phase).sin() * 0.6
                + a.mul_add(self.spoke_mult, self.spoke_phase).cos() * 0.4)
    }
}

/// Deterministic per-cell jitter that breaks quantization ties
#[derive(Debug, Clone, Copy)]
pub struct Jitter {
    salt: u64,
    amplitude: f64,
}

impl Jitter {
    /// Draw a jitter salt from the design's random stream
    pub fn draw(rng: &mut StdRng, amplitude: f64) -> Self {
        Self {
            salt: rng.random(),
            amplitude,
        }
    }

    /// Hash-based white noise in `[-amplitude, amplitude]`, stable per cell
    pub fn eval(&self, fx: usize, fy: usize) -> f64 {
        let mut h = self.salt ^ (((fx as u64) << 32) | fy as u64);
        h ^= h >> 33;
        h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
        h ^= h >> 33;
        h = h.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
        h ^= h >> 33;
        let unit = (h >> 11) as f64 / (1u64 << 53) as f64;
        self.amplitude * unit.mul_add(2.0, -1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_fill_wedge_is_diagonal_symmetric() {
        let wedge = fill_wedge(|fx, fy| fx as f64 * 10.0 + fy as f64);
        for fy in 0..WEDGE_SIZE {
            for fx in 0..WEDGE_SIZE {
                assert_eq!(wedge.get([fy, fx]), wedge.get([fx, fy]));
            }
        }
    }

    #[test]
    fn test_jitter_is_stable_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let jitter = Jitter::draw(&mut rng, 0.03);
        for fx in 0..WEDGE_SIZE {
            for fy in 0..WEDGE_SIZE {
                let first = jitter.eval(fx, fy);
                assert_eq!(first, jitter.eval(fx, fy));
                assert!(first.abs() <= 0.03);
            }
        }
    }

    #[test]
    fn test_blob_peaks_at_center() {
        let mut rng = StdRng::seed_from_u64(11);
        let blob = Blob::draw(&mut rng, 0.5, 1.0);
        let peak = blob.eval(blob.center_x, blob.center_y);
        assert!(peak > blob.eval(blob.center_x + 3.0, blob.center_y));
    }

    #[test]
    fn test_zero_line_bias_silences_banding() {
        let mut rng = StdRng::seed_from_u64(3);
        let band = BandTerm::draw(&mut rng, 0.0);
        assert_eq!(band.eval(4.2, 0.7), 0.0);
    }
}
