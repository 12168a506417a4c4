//! `TracingObserver`: structured logging of a simulation run.
//!
//! Levels:
//!
//! | Level   | What                                                      |
//! |---------|-----------------------------------------------------------|
//! | `INFO`  | start, requests, boardings, deliveries, completion         |
//! | `DEBUG` | car moves and dwells                                      |
//! | `TRACE` | idle cars, per-tick summaries                             |
//!
//! Installing a subscriber is the application's job; this observer only
//! emits events under the `lift_output::log` target.

use lift_building::LiftEvent;
use lift_core::LiftConfig;
use lift_sim::{RunReport, SimObserver, TickSummary};
use tracing::{debug, info, trace};

/// A [`SimObserver`] that turns every hook into a `tracing` event with
/// structured fields (`tick`, `elevator`, `floor`, `person`, …).
#[derive(Debug, Default)]
pub struct TracingObserver {
    events: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of simulation events logged so far.
    pub fn events_logged(&self) -> u64 {
        self.events
    }
}

impl SimObserver for TracingObserver {
    fn on_sim_start(&mut self, config: &LiftConfig) {
        info!(
            floors       = config.floors,
            elevators    = config.elevators,
            total_people = config.total_people,
            seed         = config.seed,
            "building initialised"
        );
    }

    fn on_event(&mut self, event: &LiftEvent) {
        self.events += 1;
        match event {
            LiftEvent::PassengerRequested { tick, person } => info!(
                tick        = tick.0,
                person      = %person.id,
                floor       = person.origin.0,
                destination = person.destination.0,
                direction   = %person.direction(),
                "passenger requested"
            ),
            LiftEvent::Boarded { tick, elevator, floor, person, destination } => info!(
                tick        = tick.0,
                elevator    = %elevator,
                floor       = floor.0,
                person      = %person,
                destination = destination.0,
                "passenger boarded"
            ),
            LiftEvent::Disembarked { tick, elevator, floor, person } => info!(
                tick     = tick.0,
                elevator = %elevator,
                floor    = floor.0,
                person   = %person,
                "passenger delivered"
            ),
            LiftEvent::Dwelled { tick, elevator, floor, passengers } => debug!(
                tick       = tick.0,
                elevator   = %elevator,
                floor      = floor.0,
                passengers = *passengers,
                "elevator dwelling"
            ),
            LiftEvent::Moved { tick, elevator, from, to, direction, passengers } => debug!(
                tick       = tick.0,
                elevator   = %elevator,
                from       = from.0,
                floor      = to.0,
                direction  = %direction,
                passengers = *passengers,
                "elevator moved"
            ),
            LiftEvent::Idle { tick, elevator, floor, passengers } => trace!(
                tick       = tick.0,
                elevator   = %elevator,
                floor      = floor.0,
                passengers = *passengers,
                "elevator idle"
            ),
        }
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        trace!(
            tick        = summary.tick.0,
            admitted    = summary.admitted,
            waiting     = summary.waiting,
            riding      = summary.riding,
            people_done = summary.people_done,
            moved       = summary.moved,
            "tick complete"
        );
    }

    fn on_sim_end(&mut self, report: &RunReport) {
        info!(
            elapsed     = report.elapsed,
            people_done = report.people_done,
            "all passengers delivered"
        );
        for car in &report.cars {
            debug!(
                elevator         = %car.id,
                floor            = car.final_floor.0,
                floors_travelled = car.floors_travelled,
                boarded          = car.boarded,
                delivered        = car.delivered,
                "elevator totals"
            );
        }
    }
}
