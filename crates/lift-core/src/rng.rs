//! Deterministic simulation-level RNG.
//!
//! Passenger admission is the only random process in the simulator and it
//! runs on the dispatcher thread, so a single `SmallRng` seeded from
//! [`LiftConfig::seed`][crate::LiftConfig::seed] is enough.  The same seed
//! always produces the same sequence of (origin, destination) pairs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG used for passenger admission.
///
/// Used only in single-threaded contexts.  Elevator steps never draw random
/// numbers.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng(..)")
    }
}
