//! Fluent builder for constructing a [`Sim`].

use lift_building::Building;
use lift_core::{ElevatorId, Floor, LiftConfig, SimRng};
use lift_elevator::Elevator;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                     |
/// |--------------------------|-----------------------------|
/// | `.initial_floors(v)`     | Every car on floor 1        |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .initial_floors(vec![Floor(1), Floor(10)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: LiftConfig,
    floors: Option<Vec<Floor>>,
}

impl SimBuilder {
    pub fn new(config: LiftConfig) -> Self {
        Self { config, floors: None }
    }

    /// Supply the starting floor of each car (must be length `elevators`).
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    /// Validate inputs, place the fleet, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let car_count = self.config.elevators as usize;

        let floors = match self.floors {
            Some(f) => {
                if f.len() != car_count {
                    return Err(SimError::FleetSizeMismatch {
                        expected: car_count,
                        got:      f.len(),
                    });
                }
                for &floor in &f {
                    self.config.check_floor(floor)?;
                }
                f
            }
            None => vec![Floor::GROUND; car_count],
        };

        let elevators = floors
            .into_iter()
            .enumerate()
            .map(|(slot, floor)| Elevator::new(ElevatorId::from_slot(slot), floor))
            .collect();

        Ok(Sim {
            building:    Building::new(self.config.floors, self.config.total_people),
            elevators,
            rng:         SimRng::new(self.config.seed),
            next_person: 1,
            config:      self.config,
        })
    }
}
