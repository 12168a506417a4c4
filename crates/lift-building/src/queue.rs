//! Per-floor wait queues.

use std::collections::VecDeque;

use lift_core::{Direction, Floor, PersonId};

use crate::Person;

/// The two wait queues of one floor.
///
/// Invariant: every passenger in `up` is headed above this floor, every
/// passenger in `down` below it.  [`push`](Self::push) routes by the
/// passenger's own direction, and [`board`](Self::board) only ever removes
/// from the front, so the invariant cannot be broken through this API.
#[derive(Clone, Debug, Default)]
pub struct FloorQueue {
    up:   VecDeque<Person>,
    down: VecDeque<Person>,
}

impl FloorQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `person` to the queue matching their trip direction.
    pub fn push(&mut self, person: Person) {
        match person.direction() {
            Direction::Up   => self.up.push_back(person),
            Direction::Down => self.down.push_back(person),
            Direction::Idle => debug_assert!(false, "{} has no direction", person.id),
        }
    }

    /// Remove up to `room` passengers in queue order and return them.
    ///
    /// `Up` and `Down` draw from the matching queue only.  `Idle` draws from
    /// the up queue first, then the down queue.  Whoever does not fit stays
    /// in the queue of their own direction, at the front, in original order.
    pub fn board(&mut self, direction: Direction, room: usize) -> Vec<Person> {
        let mut boarded = Vec::new();
        match direction {
            Direction::Up   => take_front(&mut self.up, room, &mut boarded),
            Direction::Down => take_front(&mut self.down, room, &mut boarded),
            Direction::Idle => {
                take_front(&mut self.up, room, &mut boarded);
                take_front(&mut self.down, room - boarded.len(), &mut boarded);
            }
        }
        boarded
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    /// Ids waiting in each queue, front first: `(up, down)`.
    pub fn ids(&self) -> (Vec<PersonId>, Vec<PersonId>) {
        (
            self.up.iter().map(|p| p.id).collect(),
            self.down.iter().map(|p| p.id).collect(),
        )
    }

    /// `true` if the directional invariant holds for a queue at `floor`.
    pub fn is_consistent_at(&self, floor: Floor) -> bool {
        self.up.iter().all(|p| p.destination > floor && p.origin == floor)
            && self.down.iter().all(|p| p.destination < floor && p.origin == floor)
    }
}

fn take_front(queue: &mut VecDeque<Person>, room: usize, out: &mut Vec<Person>) {
    let n = room.min(queue.len());
    out.extend(queue.drain(..n));
}
