//! Benchmark input generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{AlgoBenchError, Result};

/// Produces arrays of uniformly distributed integers in `[min_value, max_value]`.
#[derive(Debug)]
pub struct InputGenerator {
    rng: StdRng,
    min_value: i32,
    max_value: i32,
}

impl InputGenerator {
    /// `seed = None` draws the seed from the OS.
    pub fn new(min_value: i32, max_value: i32, seed: Option<u64>) -> Result<Self> {
        if min_value > max_value {
            return Err(AlgoBenchError::BadRequest(format!(
                "minValue ({min_value}) must not exceed maxValue ({max_value})"
            )));
        }
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Ok(Self { rng, min_value, max_value })
    }

    pub fn generate(&mut self, size: usize) -> Vec<i32> {
        let (lo, hi) = (self.min_value, self.max_value);
        (0..size).map(|_| self.rng.random_range(lo..=hi)).collect()
    }
}
