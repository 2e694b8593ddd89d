//! Noise sources for forecast generation.

use forecast_spi::NoiseSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Always returns zero; forecasts follow the projected trend exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

/// Uniform noise in `[-1, 1]` from a seeded generator.
///
/// Two instances built from the same seed yield the same sequence.
#[derive(Debug, Clone)]
pub struct SeededNoise {
    seed: u64,
    rng: StdRng,
}

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NoiseSource for SeededNoise {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
