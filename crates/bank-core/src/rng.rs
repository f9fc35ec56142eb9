//! Deterministic simulation RNG.
//!
//! One `SimRng` drives every random draw of a run.  Seeding it from
//! `BankConfig::seed` makes a run fully reproducible: the same seed and
//! window count always produce the same event trace.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for inter-arrival and service-time draws.
///
/// Used only from the single driver thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `1..=max`.  A `max` of 0 is treated as 1.
    #[inline]
    pub fn minutes_up_to(&mut self, max: u32) -> u32 {
        self.0.gen_range(1..=max.max(1))
    }
}
