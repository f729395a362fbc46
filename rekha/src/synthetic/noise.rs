//! Seeded noise source for synthetic clouds.
//!
//! Provides Gaussian and uniform samples with deterministic seeding support.

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, StandardNormal, Uniform};

/// Noise generator with configurable seed for reproducibility
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Zero-mean Gaussian sample with given standard deviation
    #[inline]
    pub fn gaussian(&mut self, stddev: f64) -> f64 {
        if stddev <= 0.0 {
            return 0.0;
        }
        let n: f64 = self.rng.sample(StandardNormal);
        n * stddev
    }

    /// Uniform sample in [0, 1)
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        Uniform::new(0.0f64, 1.0).sample(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_seed() {
        let mut noise1 = NoiseGenerator::new(42);
        let mut noise2 = NoiseGenerator::new(42);

        for _ in 0..100 {
            assert_eq!(noise1.gaussian(1.0), noise2.gaussian(1.0));
            assert_eq!(noise1.uniform(), noise2.uniform());
        }
    }

    #[test]
    fn test_zero_stddev() {
        let mut noise = NoiseGenerator::new(42);
        for _ in 0..10 {
            assert_eq!(noise.gaussian(0.0), 0.0);
            assert_eq!(noise.gaussian(-1.0), 0.0);
        }
    }

    #[test]
    fn test_uniform_range() {
        let mut noise = NoiseGenerator::new(7);
        for _ in 0..1000 {
            let u = noise.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_gaussian_moments() {
        let mut noise = NoiseGenerator::new(42);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| noise.gaussian(0.5)).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.02, "mean = {}", mean);
        assert!((var.sqrt() - 0.5).abs() < 0.02, "stddev = {}", var.sqrt());
    }
}
