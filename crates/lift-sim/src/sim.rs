//! The `Sim` struct (the dispatcher) and its tick loop.

use lift_building::{Building, LiftEvent, Person};
use lift_core::{LiftConfig, PersonId, SimRng, Tick};
use lift_elevator::{Elevator, StepOutcome};

use crate::{CarReport, RunReport, SimError, SimObserver, SimResult, TickSummary, pre_assign};

/// The dispatcher: owns the building, the fleet, and the admission RNG, and
/// drives the five-phase tick loop described in the crate docs.
///
/// The fleet lives beside the [`Building`] rather than inside its lock.  Each
/// car's state is private to that car, so the step phase hands out one
/// `&mut Elevator` per task plus a shared `&Building`, and only queue and
/// counter access goes through the lock.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated configuration.
    pub config: LiftConfig,

    pub(crate) building:    Building,
    pub(crate) elevators:   Vec<Elevator>,
    pub(crate) rng:         SimRng,
    /// Id of the next passenger to admit; `total_people + 1` once the quota
    /// is exhausted.
    pub(crate) next_person: u32,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every passenger is delivered and every car is at rest.
    ///
    /// Returns the run report, whose `elapsed` field is the number of ticks
    /// taken.  Stops early with [`SimError::ConsistencyViolation`] if more
    /// deliveries are counted than passengers exist.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        observer.on_sim_start(&self.config);
        while !self.step_tick(observer)? {}
        let report = self.report();
        observer.on_sim_end(&report);
        Ok(report)
    }

    /// Run at most `n` ticks, stopping early once the simulation is done.
    ///
    /// Returns `true` if the simulation finished.  Useful for tests and
    /// incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<bool> {
        for _ in 0..n {
            if self.step_tick(observer)? {
                return Ok(true);
            }
        }
        Ok(self.is_simulation_done())
    }

    /// Process exactly one tick.  Returns `true` if the termination predicate
    /// holds afterwards.
    pub fn step_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        let now = self.building.time_elapsed();
        observer.on_tick_start(now);

        // ── Phase 1: admission ────────────────────────────────────────────
        if let Some(person) = self.admit_next() {
            observer.on_event(&LiftEvent::PassengerRequested { tick: now, person });
        }

        // ── Phase 2: pre-assignment (sequential, id order) ────────────────
        let waiting = self.building.waiting_floors();
        pre_assign(&mut self.elevators, &waiting);

        // ── Phase 3: concurrent elevator steps, joined before continuing ──
        let results = self.step_elevators(now);
        let mut moved = 0;
        for (outcome, events) in &results {
            if *outcome == StepOutcome::Moved {
                moved += 1;
            }
            for event in events {
                observer.on_event(event);
            }
        }

        // ── Phase 4: advance the clock and check bookkeeping ──────────────
        self.building.advance_clock();
        let people_done  = self.building.people_done();
        let total_people = self.building.total_people();
        if people_done > total_people {
            return Err(SimError::ConsistencyViolation { tick: now, people_done, total_people });
        }

        observer.on_tick_end(&TickSummary {
            tick:     now,
            admitted: self.admitted(),
            waiting:  self.building.waiting_count(),
            riding:   self.elevators.iter().map(Elevator::passenger_count).sum(),
            people_done,
            moved,
        });

        // ── Phase 5: termination ──────────────────────────────────────────
        Ok(self.is_simulation_done())
    }

    /// `true` once the quota is admitted, every car is idle and empty, and
    /// every passenger has been delivered.
    ///
    /// Wait queues are not inspected: with the quota admitted and
    /// `people_done == total_people`, nobody can still be waiting.
    pub fn is_simulation_done(&self) -> bool {
        self.admitted() == self.building.total_people()
            && self.elevators.iter().all(Elevator::is_at_rest)
            && self.building.people_done() == self.building.total_people()
    }

    #[inline]
    pub fn building(&self) -> &Building {
        &self.building
    }

    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Passengers admitted so far.
    #[inline]
    pub fn admitted(&self) -> u32 {
        self.next_person - 1
    }

    /// Ticks elapsed so far.
    #[inline]
    pub fn now(&self) -> Tick {
        self.building.time_elapsed()
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> RunReport {
        RunReport {
            elapsed:      self.building.time_elapsed().0,
            people_done:  self.building.people_done(),
            total_people: self.building.total_people(),
            cars:         self.elevators
                .iter()
                .map(|car| CarReport {
                    id:               car.id(),
                    final_floor:      car.current_floor(),
                    floors_travelled: car.stats().floors_travelled,
                    boarded:          car.stats().boarded,
                    delivered:        car.stats().delivered,
                })
                .collect(),
        }
    }

    // ── Tick phases ───────────────────────────────────────────────────────

    /// Admit the next passenger if the quota is not yet exhausted.
    fn admit_next(&mut self) -> Option<Person> {
        if self.next_person > self.building.total_people() {
            return None;
        }
        let id = PersonId(self.next_person);
        self.next_person += 1;
        Some(self.building.admit(id, &mut self.rng))
    }

    /// Step every car once and return each car's outcome and events in
    /// elevator id order.
    ///
    /// With the `parallel` feature the steps run on Rayon's thread pool; the
    /// collect is the barrier, so no car task outlives the tick.
    fn step_elevators(&mut self, now: Tick) -> Vec<(StepOutcome, Vec<LiftEvent>)> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let building  = &self.building;
        let elevators = &mut self.elevators;

        let step = |car: &mut Elevator| {
            let mut events = Vec::new();
            let outcome = car.step(building, now, &mut events);
            (outcome, events)
        };

        #[cfg(not(feature = "parallel"))]
        {
            elevators.iter_mut().map(step).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            elevators.par_iter_mut().map(step).collect()
        }
    }
}
