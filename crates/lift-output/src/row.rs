//! Plain data row types written by output backends.

use lift_building::LiftEvent;
use lift_sim::TickSummary;

/// One simulation event, flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub tick:        u64,
    /// [`LiftEvent::kind`] of the source event.
    pub kind:        &'static str,
    pub elevator:    Option<u32>,
    /// Where the event happened; for moves, the arrival floor.
    pub floor:       u32,
    pub person:      Option<u32>,
    /// Passenger destination for requests and boardings.
    pub destination: Option<u32>,
    /// Riders aboard after the event, for car events.
    pub passengers:  Option<u32>,
}

impl From<&LiftEvent> for EventRow {
    fn from(event: &LiftEvent) -> Self {
        let destination = match event {
            LiftEvent::PassengerRequested { person, .. } => Some(person.destination.0),
            LiftEvent::Boarded { destination, .. }       => Some(destination.0),
            _                                            => None,
        };
        let passengers = match *event {
            LiftEvent::Dwelled { passengers, .. }
            | LiftEvent::Moved { passengers, .. }
            | LiftEvent::Idle { passengers, .. } => Some(passengers as u32),
            _ => None,
        };
        Self {
            tick:     event.tick().0,
            kind:     event.kind(),
            elevator: event.elevator().map(u32::from),
            floor:    event.floor().0,
            person:   event.person().map(u32::from),
            destination,
            passengers,
        }
    }
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub admitted:    u32,
    pub waiting:     u64,
    pub riding:      u64,
    pub people_done: u32,
    pub moved:       u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:        s.tick.0,
            admitted:    s.admitted,
            waiting:     s.waiting as u64,
            riding:      s.riding as u64,
            people_done: s.people_done,
            moved:       s.moved as u64,
        }
    }
}
