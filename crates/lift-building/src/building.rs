//! The `Building`: shared wait queues and counters behind a single lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lift_core::{Floor, PersonId, SimRng, Tick};

use crate::{FloorQueue, Person};

// ── BuildingState ─────────────────────────────────────────────────────────────

/// Everything the elevators and the dispatcher share, guarded by
/// [`Building::lock`].
///
/// `queues[floor.index()]` is the wait queue of `floor`.
#[derive(Debug)]
pub struct BuildingState {
    queues:       Vec<FloorQueue>,
    people_done:  u32,
    time_elapsed: Tick,
}

impl BuildingState {
    fn new(floors: u32) -> Self {
        Self {
            queues:       vec![FloorQueue::new(); floors as usize],
            people_done:  0,
            time_elapsed: Tick::ZERO,
        }
    }

    #[inline]
    pub fn queue(&self, floor: Floor) -> &FloorQueue {
        &self.queues[floor.index()]
    }

    #[inline]
    pub fn queue_mut(&mut self, floor: Floor) -> &mut FloorQueue {
        &mut self.queues[floor.index()]
    }

    /// Iterate `(floor, queue)` from the ground floor up.
    pub fn queues(&self) -> impl Iterator<Item = (Floor, &FloorQueue)> {
        self.queues
            .iter()
            .enumerate()
            .map(|(i, q)| (Floor::from_index(i), q))
    }

    pub fn has_any_waiting(&self) -> bool {
        self.queues.iter().any(|q| !q.is_empty())
    }

    /// Floors with at least one waiting passenger, ascending.
    pub fn waiting_floors(&self) -> Vec<Floor> {
        self.queues()
            .filter(|(_, q)| !q.is_empty())
            .map(|(floor, _)| floor)
            .collect()
    }

    /// Total passengers waiting on all floors.
    pub fn waiting_count(&self) -> usize {
        self.queues.iter().map(FloorQueue::len).sum()
    }

    /// The waiting floor closest to `from`.  Ties go to the lower floor.
    pub fn nearest_waiting(&self, from: Floor) -> Option<Floor> {
        self.queues()
            .filter(|(_, q)| !q.is_empty())
            .map(|(floor, _)| floor)
            .min_by_key(|&floor| (floor.distance(from), floor))
    }

    /// Count one delivered passenger and return the new total.
    ///
    /// The caller checks the result against `total_people`; exceeding it is a
    /// consistency violation.
    #[inline]
    pub fn record_delivery(&mut self) -> u32 {
        self.people_done += 1;
        self.people_done
    }

    #[inline]
    pub fn people_done(&self) -> u32 {
        self.people_done
    }

    #[inline]
    pub fn time_elapsed(&self) -> Tick {
        self.time_elapsed
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// Floor count, passenger quota, and the lock around [`BuildingState`].
///
/// `Building` is `Sync`: the dispatcher and every elevator step share one
/// `&Building` and serialize through [`lock`](Self::lock).  No read of queue
/// state is valid outside the guard.
#[derive(Debug)]
pub struct Building {
    floors:       u32,
    total_people: u32,
    state:        Mutex<BuildingState>,
}

impl Building {
    /// Create a building with `floors` empty floors.
    ///
    /// `floors` must be at least 2 (checked by `LiftConfig::validate`);
    /// admission relies on it to find a destination distinct from the origin.
    pub fn new(floors: u32, total_people: u32) -> Self {
        Self {
            floors,
            total_people,
            state: Mutex::new(BuildingState::new(floors)),
        }
    }

    #[inline]
    pub fn floors(&self) -> u32 {
        self.floors
    }

    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.floors)
    }

    #[inline]
    pub fn total_people(&self) -> u32 {
        self.total_people
    }

    /// Acquire the building lock.
    ///
    /// A panic while holding the guard cannot leave a queue half-moved (all
    /// transfers are single `Vec`/`VecDeque` calls), so a poisoned lock is
    /// recovered rather than propagated.
    pub fn lock(&self) -> MutexGuard<'_, BuildingState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create passenger `id` at a random floor, heading to a different random
    /// floor, and queue them at the origin.
    ///
    /// The destination is rejection-sampled until it differs from the origin.
    pub fn admit(&self, id: PersonId, rng: &mut SimRng) -> Person {
        let origin = Floor(rng.gen_range(1..=self.floors));
        let destination = loop {
            let candidate = Floor(rng.gen_range(1..=self.floors));
            if candidate != origin {
                break candidate;
            }
        };
        let person = Person::new(id, origin, destination);
        self.enqueue(person.clone());
        person
    }

    /// Queue an already-created passenger at their origin floor.
    pub fn enqueue(&self, person: Person) {
        let origin = person.origin;
        self.lock().queue_mut(origin).push(person);
    }

    pub fn has_any_waiting(&self) -> bool {
        self.lock().has_any_waiting()
    }

    /// Snapshot of floors with demand, ascending.
    pub fn waiting_floors(&self) -> Vec<Floor> {
        self.lock().waiting_floors()
    }

    pub fn waiting_count(&self) -> usize {
        self.lock().waiting_count()
    }

    /// Ids queued at `floor`: `(up, down)`.
    pub fn queue_snapshot(&self, floor: Floor) -> (Vec<PersonId>, Vec<PersonId>) {
        self.lock().queue(floor).ids()
    }

    /// Count one delivered passenger; see [`BuildingState::record_delivery`].
    pub fn record_delivery(&self) -> u32 {
        self.lock().record_delivery()
    }

    pub fn people_done(&self) -> u32 {
        self.lock().people_done()
    }

    pub fn time_elapsed(&self) -> Tick {
        self.lock().time_elapsed()
    }

    /// Advance the tick counter by one and return the new value.
    pub fn advance_clock(&self) -> Tick {
        let mut state = self.lock();
        state.time_elapsed = state.time_elapsed.next();
        state.time_elapsed
    }
}
