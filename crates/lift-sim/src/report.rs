//! Plain data reported to observers and returned from a run.

use lift_core::{ElevatorId, Floor, Tick};

/// Counters sampled at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// The tick that just finished.
    pub tick:        Tick,
    /// Passengers admitted so far.
    pub admitted:    u32,
    /// Passengers still queued on any floor.
    pub waiting:     usize,
    /// Passengers inside cars.
    pub riding:      usize,
    pub people_done: u32,
    /// Cars that travelled a floor this tick.
    pub moved:       usize,
}

/// Final state of one car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarReport {
    pub id:               ElevatorId,
    pub final_floor:      Floor,
    pub floors_travelled: u64,
    pub boarded:          u32,
    pub delivered:        u32,
}

/// Result of a completed run.
///
/// `elapsed` is the number of ticks until every passenger was delivered and
/// every car came to rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub elapsed:      u64,
    pub people_done:  u32,
    pub total_people: u32,
    pub cars:         Vec<CarReport>,
}

impl RunReport {
    /// Mean floors travelled per delivered passenger, or 0 for an empty run.
    pub fn floors_per_delivery(&self) -> f64 {
        if self.people_done == 0 {
            return 0.0;
        }
        let travelled: u64 = self.cars.iter().map(|c| c.floors_travelled).sum();
        travelled as f64 / self.people_done as f64
    }
}
