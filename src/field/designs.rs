//! Named chart designs and the immutable design registry
//!
//! Six closed-form designs use fixed threshold lists tuned to their value
//! ranges; six stochastic designs lean on seeded blob fields and normalized
//! binning. All twelve share the banding and jitter terms, so the line-bias
//! knob and tie-breaking noise behave uniformly.

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::field::terms::{BandTerm, BlobField, Jitter, fill_wedge, polar_angle, radial_distance};
use crate::io::configuration::JITTER_AMPLITUDE;
use crate::math::quantize::QuantizePolicy;

/// A named chart design: field generator plus quantization policy
pub struct Design {
    /// Registry key used by the CLI and API
    pub name: &'static str,
    /// Human-readable label for legends
    pub label: &'static str,
    /// How the continuous field becomes palette indices
    pub policy: QuantizePolicy,
    generator: fn(u64, f64) -> Array2<f64>,
}

impl Design {
    /// Evaluate the design's scalar field for a seed and line-bias strength
    pub fn generate_field(&self, seed: u64, line_bias: f64) -> Array2<f64> {
        (self.generator)(seed, line_bias)
    }
}

const RINGS_SPOKES_CUTOFFS: [f64; 6] = [-0.55, -0.25, -0.05, 0.10, 0.28, 0.52];
const PETAL_VAULT_CUTOFFS: [f64; 6] = [-0.4, -0.15, 0.05, 0.20, 0.38, 0.60];
const STARBURST_CUTOFFS: [f64; 6] = [-0.45, -0.2, 0.0, 0.18, 0.35, 0.55];
const MOSAIC_STEPS_CUTOFFS: [f64; 6] = [0.6, 1.15, 1.7, 2.2, 2.8, 3.4];
const KNOTWORK_CUTOFFS: [f64; 6] = [0.7, 1.35, 2.0, 2.55, 3.2, 3.9];
const LATTICE_GARDEN_CUTOFFS: [f64; 6] = [-0.4, -0.15, 0.05, 0.22, 0.40, 0.62];

fn rings_spokes(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let k_r = rng.random_range(0.55..0.9);
    let k_a = rng.random_range(4.5..7.0);
    let wobble = rng.random_range(0.15..0.35);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        (r * k_r).sin() * 0.65
            + (a * k_a).cos() * 0.55
            + ((x - y) * 0.7).sin() * wobble
            + band.eval(r, a)
            + jitter.eval(fx, fy)
    })
}

fn petal_vault(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let k1 = rng.random_range(0.35..0.55);
    let k2 = rng.random_range(1.2..1.8);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        let mut value = (r * k1).cos() * (a * 8.0).cos().mul_add(0.35, 0.65)
            + 0.35 * ((x + y) * k2).sin();
        // Solid pupil at the very center
        if r < 2.2 {
            value += 0.7;
        }
        value + band.eval(r, a) + jitter.eval(fx, fy)
    })
}

fn starburst(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let k = rng.random_range(0.85..1.15);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        let mut value =
            (a * 12.0).cos() * 0.7 + (r * k).cos() * 0.6 + ((x - y) * 0.9).sin() * 0.25;
        // Brighten the axes and diagonals into rays
        if fy == 0 || fx == fy {
            value += 0.35;
        }
        value + band.eval(r, a) + jitter.eval(fx, fy)
    })
}

fn mosaic_steps(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let mut value = 0.0;
        if (fx + fy) % 4 <= 1 {
            value += 1.1;
        }
        if (fx - fy) % 5 <= 1 {
            value += 1.0;
        }
        if fx % 3 == 0 || fy % 3 == 0 {
            value += 0.9;
        }
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        value += (r as usize % 6) as f64 * 0.35;
        if (fx * fy) % 11 == 0 {
            value += 0.8;
        }
        value + band.eval(r, polar_angle(x, y)) + jitter.eval(fx, fy)
    })
}

fn knotwork(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let mut value = 0.0;
        if (1..=2).contains(&(fx % 4)) && (2..=3).contains(&(fy % 6)) {
            value += 1.8;
        }
        if (1..=2).contains(&(fy % 4)) && (2..=3).contains(&(fx % 6)) {
            value += 1.6;
        }
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        if r as usize % 5 == 0 {
            value += 1.5;
        }
        if fx % 7 == 0 && fy % 7 == 0 {
            value += 0.8;
        }
        value += 0.6 * (((x + 1.0) * 0.8).sin() + ((y + 1.0) * 0.7).cos());
        value + band.eval(r, polar_angle(x, y)) + jitter.eval(fx, fy)
    })
}

fn lattice_garden(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let value = 0.45 * (x * 0.9).sin()
            + 0.45 * (y * 1.05).cos()
            + 0.55 * (r * 0.55).cos()
            + 0.25 * ((x - y) * 1.7).cos();
        value + band.eval(r, polar_angle(x, y)) + jitter.eval(fx, fy)
    })
}

fn blossom_field(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let blobs = BlobField::draw(&mut rng, 5, 0.6, 1.2);
    let k_r = rng.random_range(0.4..0.7);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        blobs.eval(x, y)
            + 0.35 * (a * 8.0).cos()
            + 0.3 * (r * k_r).cos()
            + band.eval(r, a)
            + jitter.eval(fx, fy)
    })
}

fn pebble_mosaic(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let blobs = BlobField::draw(&mut rng, 6, 0.5, 1.0);
    let checker = rng.random_range(1.1..1.6);
    let corridor = rng.random_range(0.7..1.1);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        blobs.eval(x, y)
            + 0.3 * (x * checker).sin() * (y * checker).sin()
            + 0.4 * (1.0 - ((x - y) * corridor).sin().abs())
            + band.eval(r, polar_angle(x, y))
            + jitter.eval(fx, fy)
    })
}

fn aurora_veil(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let blobs = BlobField::draw(&mut rng, 4, 0.4, 0.8);
    let drift = rng.random_range(0.25..0.45);
    let phase = rng.random_range(0.0..std::f64::consts::TAU);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        blobs.eval(x, y)
            + 0.45 * ((x + y).mul_add(drift, phase)).sin()
            + 0.3 * (a * 6.0).cos()
            + band.eval(r, a)
            + jitter.eval(fx, fy)
    })
}

fn thistle_crown(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let blobs = BlobField::draw(&mut rng, 3, 0.4, 0.9);
    let k = rng.random_range(0.8..1.1);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        0.6 * (a * 10.0).cos()
            + blobs.eval(x, y)
            + 0.35 * (r * k).cos()
            + band.eval(r, a)
            + jitter.eval(fx, fy)
    })
}

fn ripple_pond(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let k = rng.random_range(0.6..1.1);
    let blobs = BlobField::draw(&mut rng, 3, 0.2, 0.5);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        0.8 * (r * k).sin()
            + blobs.eval(x, y)
            + 0.2 * (a * 4.0).cos()
            + band.eval(r, a)
            + jitter.eval(fx, fy)
    })
}

fn ember_glow(seed: u64, line_bias: f64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let glow_sigma = rng.random_range(3.5..5.5);
    let blobs = BlobField::draw(&mut rng, 4, 0.3, 0.7);
    let flicker = rng.random_range(0.0..std::f64::consts::TAU);
    let band = BandTerm::draw(&mut rng, line_bias);
    let jitter = Jitter::draw(&mut rng, JITTER_AMPLITUDE);
    fill_wedge(move |fx, fy| {
        let (x, y) = (fx as f64, fy as f64);
        let r = radial_distance(x, y);
        let a = polar_angle(x, y);
        (-(r * r) / (2.0 * glow_sigma * glow_sigma)).exp()
            + blobs.eval(x, y)
            + 0.25 * (a.mul_add(4.0, flicker)).cos()
            - 0.3 * (r * 0.9).cos()
            + band.eval(r, a)
            + jitter.eval(fx, fy)
    })
}

/// Every registered design in display order
pub static DESIGNS: &[Design] = &[
    Design {
        name: "rings_spokes",
        label: "Rings & Spokes",
        policy: QuantizePolicy::Fixed(&RINGS_SPOKES_CUTOFFS),
        generator: rings_spokes,
    },
    Design {
        name: "petal_vault",
        label: "Petal Vault",
        policy: QuantizePolicy::Fixed(&PETAL_VAULT_CUTOFFS),
        generator: petal_vault,
    },
    Design {
        name: "starburst",
        label: "Starburst",
        policy: QuantizePolicy::Fixed(&STARBURST_CUTOFFS),
        generator: starburst,
    },
    Design {
        name: "mosaic_steps",
        label: "Mosaic Steps",
        policy: QuantizePolicy::Fixed(&MOSAIC_STEPS_CUTOFFS),
        generator: mosaic_steps,
    },
    Design {
        name: "knotwork",
        label: "Knotwork",
        policy: QuantizePolicy::Fixed(&KNOTWORK_CUTOFFS),
        generator: knotwork,
    },
    Design {
        name: "lattice_garden",
        label: "Lattice Garden",
        policy: QuantizePolicy::Fixed(&LATTICE_GARDEN_CUTOFFS),
        generator: lattice_garden,
    },
    Design {
        name: "blossom_field",
        label: "Blossom Field",
        policy: QuantizePolicy::Normalized,
        generator: blossom_field,
    },
    Design {
        name: "pebble_mosaic",
        label: "Pebble Mosaic",
        policy: QuantizePolicy::Normalized,
        generator: pebble_mosaic,
    },
    Design {
        name: "aurora_veil",
        label: "Aurora Veil",
        policy: QuantizePolicy::Normalized,
        generator: aurora_veil,
    },
    Design {
        name: "thistle_crown",
        label: "Thistle Crown",
        policy: QuantizePolicy::Normalized,
        generator: thistle_crown,
    },
    Design {
        name: "ripple_pond",
        label: "Ripple Pond",
        policy: QuantizePolicy::Normalized,
        generator: ripple_pond,
    },
    Design {
        name: "ember_glow",
        label: "Ember Glow",
        policy: QuantizePolicy::Normalized,
        generator: ember_glow,
    },
];

/// Look up a design by registry key
pub fn find(name: &str) -> Option<&'static Design> {
    DESIGNS.iter().find(|design| design.name == name)
}

/// Registry keys in display order
pub fn names() -> Vec<&'static str> {
    DESIGNS.iter().map(|design| design.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for design in DESIGNS {
            assert!(seen.insert(design.name), "duplicate design {}", design.name);
        }
    }

    #[test]
    fn test_same_seed_reproduces_field() {
        for design in DESIGNS {
            let first = design.generate_field(42, 3.0);
            let second = design.generate_field(42, 3.0);
            assert_eq!(first, second, "design {} is not reproducible", design.name);
        }
    }

    #[test]
    fn test_fields_are_diagonal_symmetric() {
        for design in DESIGNS {
            let field = design.generate_field(7, 2.0);
            for ((fy, fx), value) in field.indexed_iter() {
                assert_eq!(
                    Some(value),
                    field.get([fx, fy]),
                    "design {} asymmetric at ({fx},{fy})",
                    design.name
                );
            }
        }
    }
}
