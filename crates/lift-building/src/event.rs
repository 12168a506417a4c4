//! Observable simulation events.
//!
//! Events are side effects: cars and the dispatcher push them into a buffer,
//! and the dispatcher forwards them to its observer after each tick's
//! barrier.  They never feed back into the simulation.

use std::fmt;

use lift_core::{Direction, ElevatorId, Floor, PersonId, Tick};

use crate::Person;

/// One notable action, tagged with the tick it happened in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiftEvent {
    /// A passenger was admitted and pressed the call button at their origin.
    PassengerRequested { tick: Tick, person: Person },

    /// A passenger stepped into a car.
    Boarded {
        tick:        Tick,
        elevator:    ElevatorId,
        floor:       Floor,
        person:      PersonId,
        destination: Floor,
    },

    /// A passenger reached their destination and left the car.
    Disembarked {
        tick:     Tick,
        elevator: ElevatorId,
        floor:    Floor,
        person:   PersonId,
    },

    /// A car spent the tick at a floor because passengers got on or off.
    Dwelled {
        tick:       Tick,
        elevator:   ElevatorId,
        floor:      Floor,
        passengers: usize,
    },

    /// A car travelled one floor.
    Moved {
        tick:       Tick,
        elevator:   ElevatorId,
        from:       Floor,
        to:         Floor,
        direction:  Direction,
        passengers: usize,
    },

    /// A car had no reason to move this tick.
    Idle {
        tick:       Tick,
        elevator:   ElevatorId,
        floor:      Floor,
        passengers: usize,
    },
}

impl LiftEvent {
    pub fn tick(&self) -> Tick {
        match *self {
            LiftEvent::PassengerRequested { tick, .. }
            | LiftEvent::Boarded { tick, .. }
            | LiftEvent::Disembarked { tick, .. }
            | LiftEvent::Dwelled { tick, .. }
            | LiftEvent::Moved { tick, .. }
            | LiftEvent::Idle { tick, .. } => tick,
        }
    }

    /// The car involved, if any.
    pub fn elevator(&self) -> Option<ElevatorId> {
        match *self {
            LiftEvent::PassengerRequested { .. } => None,
            LiftEvent::Boarded { elevator, .. }
            | LiftEvent::Disembarked { elevator, .. }
            | LiftEvent::Dwelled { elevator, .. }
            | LiftEvent::Moved { elevator, .. }
            | LiftEvent::Idle { elevator, .. } => Some(elevator),
        }
    }

    /// The floor the event happened at.  For `Moved`, the arrival floor.
    pub fn floor(&self) -> Floor {
        match *self {
            LiftEvent::PassengerRequested { ref person, .. } => person.origin,
            LiftEvent::Boarded { floor, .. }
            | LiftEvent::Disembarked { floor, .. }
            | LiftEvent::Dwelled { floor, .. }
            | LiftEvent::Idle { floor, .. } => floor,
            LiftEvent::Moved { to, .. } => to,
        }
    }

    /// The passenger involved, if any.
    pub fn person(&self) -> Option<PersonId> {
        match *self {
            LiftEvent::PassengerRequested { ref person, .. } => Some(person.id),
            LiftEvent::Boarded { person, .. } | LiftEvent::Disembarked { person, .. } => {
                Some(person)
            }
            LiftEvent::Dwelled { .. } | LiftEvent::Moved { .. } | LiftEvent::Idle { .. } => None,
        }
    }

    /// Short machine-readable name, used as the `kind` column in output files.
    pub fn kind(&self) -> &'static str {
        match self {
            LiftEvent::PassengerRequested { .. } => "requested",
            LiftEvent::Boarded { .. }            => "boarded",
            LiftEvent::Disembarked { .. }        => "disembarked",
            LiftEvent::Dwelled { .. }            => "dwelled",
            LiftEvent::Moved { .. }              => "moved",
            LiftEvent::Idle { .. }               => "idle",
        }
    }
}

impl fmt::Display for LiftEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiftEvent::PassengerRequested { tick, person } => write!(
                f,
                "{tick} {} calls {} at {} for {}",
                person.id,
                person.direction(),
                person.origin,
                person.destination,
            ),
            LiftEvent::Boarded { tick, elevator, floor, person, destination } => {
                write!(f, "{tick} {elevator} picks up {person} at {floor} (to {destination})")
            }
            LiftEvent::Disembarked { tick, elevator, floor, person } => {
                write!(f, "{tick} {elevator} drops off {person} at {floor}")
            }
            LiftEvent::Dwelled { tick, elevator, floor, passengers } => {
                write!(f, "{tick} {elevator} stays at {floor} for boarding ({passengers} aboard)")
            }
            LiftEvent::Moved { tick, elevator, from, to, direction, passengers } => write!(
                f,
                "{tick} {elevator} moves {direction} {from} -> {to} ({passengers} aboard)"
            ),
            LiftEvent::Idle { tick, elevator, floor, passengers } => {
                write!(f, "{tick} {elevator} idles at {floor} ({passengers} aboard)")
            }
        }
    }
}
