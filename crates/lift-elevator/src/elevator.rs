//! The `Elevator` car.

use lift_building::{Building, BuildingState, LiftEvent, Person};
use lift_core::{CAPACITY, Direction, ElevatorId, Floor, Tick};

/// What a car did during one tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Idle with nothing to do anywhere; no event emitted.
    Skipped,
    /// Passengers got on or off; the car stayed put.
    Dwelled,
    /// The car travelled one floor.
    Moved,
    /// Direction recomputed but the car did not move.
    Stayed,
}

/// Running totals for one car, reported at the end of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElevatorStats {
    pub floors_travelled: u64,
    pub boarded:          u32,
    pub delivered:        u32,
}

/// One elevator car.
///
/// Position, direction and the passenger manifest are private to the car.
/// The dispatcher may overwrite [`direction`](Self::direction) before each
/// tick (pre-assignment); the car itself recomputes it whenever it does not
/// dwell.
#[derive(Debug)]
pub struct Elevator {
    id:            ElevatorId,
    current_floor: Floor,
    direction:     Direction,
    passengers:    Vec<Person>,
    stats:         ElevatorStats,
}

impl Elevator {
    /// A new, idle, empty car at `floor`.
    pub fn new(id: ElevatorId, floor: Floor) -> Self {
        Self {
            id,
            current_floor: floor,
            direction:     Direction::Idle,
            passengers:    Vec::with_capacity(CAPACITY),
            stats:         ElevatorStats::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Overwrite the travel intent.  Used by the dispatcher's pre-assignment.
    #[inline]
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    #[inline]
    pub fn passengers(&self) -> &[Person] {
        &self.passengers
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// `true` if the car is idle and empty.
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.direction.is_idle() && self.passengers.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> &ElevatorStats {
        &self.stats
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance this car by one tick.
    ///
    /// Every state change is appended to `events`; the return value only
    /// tells the caller which branch was taken.
    pub fn step(
        &mut self,
        building: &Building,
        now:      Tick,
        events:   &mut Vec<LiftEvent>,
    ) -> StepOutcome {
        if self.is_at_rest() && !building.has_any_waiting() {
            return StepOutcome::Skipped;
        }

        // Alighting always precedes boarding so freed seats can be reused.
        let operated = {
            let mut state = building.lock();
            let alighted = self.disembark(&mut state, now, events);
            let boarded  = self.board(&mut state, now, events);
            alighted + boarded > 0
        };

        if operated {
            events.push(LiftEvent::Dwelled {
                tick:       now,
                elevator:   self.id,
                floor:      self.current_floor,
                passengers: self.passengers.len(),
            });
            return StepOutcome::Dwelled;
        }

        self.update_direction(building);

        let from = self.current_floor;
        let to = match self.direction {
            Direction::Up if from < building.top_floor() => from.above(),
            Direction::Down if from > Floor::GROUND      => from.below(),
            _                                            => from,
        };

        if to == from {
            events.push(LiftEvent::Idle {
                tick:       now,
                elevator:   self.id,
                floor:      from,
                passengers: self.passengers.len(),
            });
            return StepOutcome::Stayed;
        }

        self.current_floor = to;
        self.stats.floors_travelled += 1;
        events.push(LiftEvent::Moved {
            tick:       now,
            elevator:   self.id,
            from,
            to,
            direction:  self.direction,
            passengers: self.passengers.len(),
        });
        StepOutcome::Moved
    }

    /// Recompute direction from the manifest, or from the nearest waiting
    /// floor when the car is empty.
    ///
    /// With riders headed both ways the current direction is kept; an idle
    /// car in that situation starts upwards.
    pub fn update_direction(&mut self, building: &Building) {
        let here = self.current_floor;

        if self.passengers.is_empty() {
            let target = building.lock().nearest_waiting(here);
            self.direction = target.map_or(Direction::Idle, |floor| Direction::toward(here, floor));
            return;
        }

        let up_needed   = self.passengers.iter().any(|p| p.destination > here);
        let down_needed = self.passengers.iter().any(|p| p.destination < here);
        self.direction = match (up_needed, down_needed) {
            (true, false)  => Direction::Up,
            (false, true)  => Direction::Down,
            (true, true)   => match self.direction {
                Direction::Idle => Direction::Up,
                keep            => keep,
            },
            (false, false) => Direction::Idle,
        };
    }

    // ── Critical-section helpers (caller holds the building lock) ─────────

    /// Drop riders whose destination is the current floor.  Returns how many.
    fn disembark(
        &mut self,
        state:  &mut BuildingState,
        now:    Tick,
        events: &mut Vec<LiftEvent>,
    ) -> usize {
        let floor = self.current_floor;
        let (arrived, riding): (Vec<Person>, Vec<Person>) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.arrives_at(floor));
        self.passengers = riding;

        for person in &arrived {
            state.record_delivery();
            self.stats.delivered += 1;
            events.push(LiftEvent::Disembarked {
                tick:     now,
                elevator: self.id,
                floor,
                person:   person.id,
            });
        }
        arrived.len()
    }

    /// Take waiting passengers matching the current direction until full.
    /// Returns how many boarded.
    fn board(
        &mut self,
        state:  &mut BuildingState,
        now:    Tick,
        events: &mut Vec<LiftEvent>,
    ) -> usize {
        let floor = self.current_floor;
        let room = CAPACITY.saturating_sub(self.passengers.len());
        let boarded = state.queue_mut(floor).board(self.direction, room);

        for person in &boarded {
            events.push(LiftEvent::Boarded {
                tick:        now,
                elevator:    self.id,
                floor,
                person:      person.id,
                destination: person.destination,
            });
        }
        self.stats.boarded += boarded.len() as u32;
        let count = boarded.len();
        self.passengers.extend(boarded);
        count
    }
}
