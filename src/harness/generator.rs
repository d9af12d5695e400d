use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{FlagsError, FlagsResult};

/// Uniform random sequence source over an inclusive value range.
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    rng: StdRng,
    value_min: i64,
    value_max: i64,
}

impl SequenceGenerator {
    /// Deterministic generator for a fixed seed.
    pub fn seeded(seed: u64, value_min: i64, value_max: i64) -> FlagsResult<Self> {
        Self::with_rng(StdRng::seed_from_u64(seed), value_min, value_max)
    }

    /// Generator seeded from operating-system entropy.
    pub fn from_entropy(value_min: i64, value_max: i64) -> FlagsResult<Self> {
        Self::with_rng(StdRng::from_entropy(), value_min, value_max)
    }

    fn with_rng(rng: StdRng, value_min: i64, value_max: i64) -> FlagsResult<Self> {
        if value_min > value_max {
            return Err(FlagsError::InvalidConfig(format!(
                "value range is empty: {value_min} > {value_max}"
            )));
        }

        Ok(Self {
            rng,
            value_min,
            value_max,
        })
    }

    /// Returns a fresh sequence of `len` readings.
    pub fn generate(&mut self, len: usize) -> Vec<i64> {
        let range = self.value_min..=self.value_max;
        (0..len).map(|_| self.rng.gen_range(range.clone())).collect()
    }
}
