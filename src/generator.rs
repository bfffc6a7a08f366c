//! Random sequence generation
//!
//! Values are drawn independently and uniformly from an inclusive range.
//! [`SequenceGenerator::with_seed`] gives reproducible sequences for tests
//! and for the `--seed` flag of the runner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ValueRange;
use crate::error::Result;
use crate::types::Value;

/// Random sequence source bound to a value range
#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    range: ValueRange,
    rng: StdRng,
}

impl SequenceGenerator {
    /// Generator seeded from the operating system
    ///
    /// Fails if `range` is inverted.
    pub fn new(range: ValueRange) -> Result<Self> {
        range.validate()?;
        Ok(Self {
            range,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Deterministic generator; fails if `range` is inverted
    pub fn with_seed(range: ValueRange, seed: u64) -> Result<Self> {
        range.validate()?;
        Ok(Self {
            range,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Draw `size` values from the configured range
    pub fn generate(&mut self, size: usize) -> Vec<Value> {
        let (min, max) = (self.range.min, self.range.max);
        (0..size).map(|_| self.rng.random_range(min..=max)).collect()
    }
}

/// Draw `size` values from the default range using the thread-local RNG
pub fn generate(size: usize) -> Vec<Value> {
    let range = ValueRange::default();
    let mut rng = rand::rng();
    (0..size)
        .map(|_| rng.random_range(range.min..=range.max))
        .collect()
}
