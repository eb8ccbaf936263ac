//! Deterministic random request batches.
//!
//! Used by the CLI's `--random` mode and by the randomized invariant tests.
//! The same seed always yields the same sequence of batches, so a failing
//! run can be reproduced from its seed alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{BuildingConfig, Floor, Request, RequestBatch};

/// Seeded generator of valid requests for a given building.
pub struct BatchRng(SmallRng);

impl BatchRng {
    pub fn new(seed: u64) -> Self {
        BatchRng(SmallRng::seed_from_u64(seed))
    }

    /// A uniformly chosen valid request (`source != destination`).
    pub fn request(&mut self, config: &BuildingConfig) -> Request {
        let source = self.0.gen_range(1..=config.max_floor);
        // Draw from the remaining max_floor - 1 floors and skip over source.
        let mut destination = self.0.gen_range(1..config.max_floor);
        if destination >= source {
            destination += 1;
        }
        Request::new(Floor(source), Floor(destination))
    }

    /// A batch of exactly `count` valid requests.
    ///
    /// `count` is not clamped to `config.max_requests`; oversized batches
    /// are useful for exercising capacity overflow.
    pub fn batch(&mut self, config: &BuildingConfig, count: usize) -> RequestBatch {
        (0..count).map(|_| self.request(config)).collect()
    }
}
