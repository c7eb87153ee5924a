//! Cosmetic jitter on the displayed uptake.
//!
//! The default source is silent. `SeededJitter` wraps a `ChaCha8Rng` so that
//! a fixed seed reproduces the same sequence of perturbations.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of display-only perturbations, in percentage points.
pub trait UptakeNoise {
    fn perturbation(&mut self) -> f64;
}

/// Always zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl UptakeNoise for NoNoise {
    fn perturbation(&mut self) -> f64 {
        0.0
    }
}

/// Uniform jitter in `[-amplitude, amplitude]` percentage points.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: ChaCha8Rng,
    amplitude: f64,
}

impl SeededJitter {
    pub fn new(seed: u64, amplitude: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            amplitude: amplitude.abs(),
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl UptakeNoise for SeededJitter {
    fn perturbation(&mut self) -> f64 {
        if self.amplitude == 0.0 || !self.amplitude.is_finite() {
            return 0.0;
        }
        self.rng.gen_range(-self.amplitude..=self.amplitude)
    }
}

/// The noise function used when results are computed for display.
#[derive(Resource)]
pub struct UptakeNoiseSource(pub Box<dyn UptakeNoise + Send + Sync>);

impl Default for UptakeNoiseSource {
    fn default() -> Self {
        Self(Box::new(NoNoise))
    }
}

impl UptakeNoiseSource {
    pub fn seeded(seed: u64, amplitude: f64) -> Self {
        Self(Box::new(SeededJitter::new(seed, amplitude)))
    }
}
