//! The `Person` value type.

use lift_core::{Direction, Floor, PersonId};

/// One transport request.
///
/// Immutable once created.  `origin != destination` always holds, so every
/// passenger has a definite direction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id:          PersonId,
    pub origin:      Floor,
    pub destination: Floor,
}

impl Person {
    /// # Panics
    /// Panics in debug mode if `origin == destination`.
    pub fn new(id: PersonId, origin: Floor, destination: Floor) -> Self {
        debug_assert_ne!(origin, destination, "{id} would travel nowhere");
        Self { id, origin, destination }
    }

    /// Direction of the trip (`Up` or `Down`, never `Idle`).
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::toward(self.origin, self.destination)
    }

    /// `true` once the car carrying this passenger stands at the destination.
    #[inline]
    pub fn arrives_at(&self, floor: Floor) -> bool {
        self.destination == floor
    }
}
