//! The simulation clock.
//!
//! One tick is one time unit: every car performs at most one state transition
//! per tick, and the building's clock advances once per tick after all cars
//! have stepped.

use std::fmt;

/// Number of ticks since the run started.
///
/// Tick 0 is the first tick.  A run's elapsed time is the clock value after
/// its final tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
