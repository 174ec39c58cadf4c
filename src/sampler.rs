//! Random sources for fixture generation.
//!
//! Every emitter takes a [`Sampler`] explicitly, so a seeded generator
//! reproduces a fixture byte for byte and tests can pin values with
//! [`FixedSampler`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer source over closed intervals
pub trait Sampler {
    /// Draw a value uniformly from `lo..=hi`
    fn sample(&mut self, lo: i64, hi: i64) -> i64;
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn sample(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).sample(lo, hi)
    }
}

/// Sampler backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSampler<R> {
    rng: R,
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSampler<StdRng> {
    /// Deterministic sampler: the same seed yields the same draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, otherwise from the operating system
    pub fn with_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> Sampler for RandomSampler<R> {
    fn sample(&mut self, lo: i64, hi: i64) -> i64 {
        self.rng.random_range(lo..=hi)
    }
}

/// Sampler that always yields the same value, clamped into the requested range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSampler(pub i64);

impl Sampler for FixedSampler {
    fn sample(&mut self, lo: i64, hi: i64) -> i64 {
        self.0.clamp(lo, hi)
    }
}
