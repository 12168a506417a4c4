//! Simulation configuration.

use crate::{ConfigError, ConfigResult, Floor};

/// Maximum number of passengers a car holds at once.
pub const CAPACITY: usize = 5;

/// Top-level simulation configuration.
///
/// Supplied by the application crate (CLI flags or a JSON file) and passed to
/// `lift_sim::SimBuilder`.  Capacity and tick granularity are fixed engine
/// constants, not configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LiftConfig {
    /// Number of floors, numbered `1..=floors`.  Must be at least 2.
    pub floors: u32,

    /// Number of cars in the fleet.  Must be at least 1.
    pub elevators: u32,

    /// Passengers admitted over the run, one per tick.
    pub total_people: u32,

    /// Seed for passenger admission.  The same seed always produces the same
    /// request sequence.
    pub seed: u64,
}

impl LiftConfig {
    /// The reference configuration: 10 floors, 2 elevators, 40 passengers.
    pub fn reference() -> Self {
        Self {
            floors:       10,
            elevators:    2,
            total_people: 40,
            seed:         42,
        }
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.floors < 2 {
            return Err(ConfigError::TooFewFloors(self.floors));
        }
        if self.elevators < 1 {
            return Err(ConfigError::NoElevators);
        }
        Ok(())
    }

    /// Check that `floor` exists in this building.
    pub fn check_floor(&self, floor: Floor) -> ConfigResult<()> {
        if floor.within(self.floors) {
            Ok(())
        } else {
            Err(ConfigError::FloorOutOfRange { floor, floors: self.floors })
        }
    }

    /// The highest floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floors)
    }
}

impl Default for LiftConfig {
    fn default() -> Self {
        Self::reference()
    }
}
