//! Seedable noise generator
//!
//! Owns a ChaCha8 stream and hands every injection its own derived RNG, so a
//! fixed session seed reproduces the whole sequence of noisy runs.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::inject::{inject_noise, NoisyConstellation};
use super::kind::NoiseKind;
use crate::error::QamResult;
use crate::shape::Constellation;

pub struct NoiseGenerator {
    /// Seed stream for per-run RNGs
    rng: ChaCha8Rng,

    /// Seed this generator was created with, if any
    seed: Option<u64>,
}

impl NoiseGenerator {
    /// Deterministic generator
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            seed: None,
        }
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::new)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Create a new RNG with a derived seed
    pub fn derive_rng(&mut self) -> ChaCha8Rng {
        let seed: u64 = self.rng.gen();
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// Inject noise using a freshly derived RNG
    pub fn inject(
        &mut self,
        constellation: &Constellation,
        kind: NoiseKind,
        level: f64,
    ) -> QamResult<NoisyConstellation> {
        let mut rng = self.derive_rng();
        inject_noise(constellation, kind, level, &mut rng)
    }
}
