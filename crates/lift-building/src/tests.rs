//! Unit tests for lift-building.

#[cfg(test)]
mod queue_tests {
    use lift_core::{Direction, Floor, PersonId};

    use crate::{FloorQueue, Person};

    fn person(id: u32, origin: u32, destination: u32) -> Person {
        Person::new(PersonId(id), Floor(origin), Floor(destination))
    }

    fn ids(people: &[Person]) -> Vec<u32> {
        people.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn push_routes_by_direction() {
        let mut q = FloorQueue::new();
        q.push(person(1, 3, 5));
        q.push(person(2, 3, 1));
        q.push(person(3, 3, 9));
        let (up, down) = q.ids();
        assert_eq!(up, [PersonId(1), PersonId(3)]);
        assert_eq!(down, [PersonId(2)]);
        assert!(q.is_consistent_at(Floor(3)));
    }

    #[test]
    fn board_up_takes_only_up_queue() {
        let mut q = FloorQueue::new();
        q.push(person(1, 3, 5));
        q.push(person(2, 3, 1));
        let boarded = q.board(Direction::Up, 5);
        assert_eq!(ids(&boarded), [1]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.ids().1, [PersonId(2)]);
    }

    #[test]
    fn board_respects_room_and_keeps_order() {
        let mut q = FloorQueue::new();
        for id in 1..=6 {
            q.push(person(id, 1, 4));
        }
        let boarded = q.board(Direction::Up, 5);
        assert_eq!(ids(&boarded), [1, 2, 3, 4, 5]);
        assert_eq!(q.ids().0, [PersonId(6)]);
    }

    #[test]
    fn idle_boards_up_then_down() {
        let mut q = FloorQueue::new();
        q.push(person(1, 5, 2));
        q.push(person(2, 5, 8));
        q.push(person(3, 5, 1));
        let boarded = q.board(Direction::Idle, 5);
        assert_eq!(ids(&boarded), [2, 1, 3]);
        assert!(q.is_empty());
    }

    #[test]
    fn idle_overflow_keeps_each_passenger_in_own_direction() {
        // One up-rider and six down-riders: the leftovers must all remain in
        // the down queue, however short the up queue was.
        let mut q = FloorQueue::new();
        q.push(person(1, 5, 9));
        for id in 2..=7 {
            q.push(person(id, 5, 1));
        }
        let boarded = q.board(Direction::Idle, 5);
        assert_eq!(ids(&boarded), [1, 2, 3, 4, 5]);
        let (up, down) = q.ids();
        assert!(up.is_empty());
        assert_eq!(down, [PersonId(6), PersonId(7)]);
        assert!(q.is_consistent_at(Floor(5)));
    }

    #[test]
    fn board_with_no_room() {
        let mut q = FloorQueue::new();
        q.push(person(1, 2, 3));
        assert!(q.board(Direction::Idle, 0).is_empty());
        assert_eq!(q.len(), 1);
    }
}

#[cfg(test)]
mod building_tests {
    use lift_core::{Direction, Floor, PersonId, SimRng, Tick};

    use crate::{Building, Person};

    #[test]
    fn new_building_is_empty() {
        let b = Building::new(10, 40);
        assert_eq!(b.floors(), 10);
        assert_eq!(b.top_floor(), Floor(10));
        assert_eq!(b.total_people(), 40);
        assert!(!b.has_any_waiting());
        assert!(b.waiting_floors().is_empty());
        assert_eq!(b.people_done(), 0);
        assert_eq!(b.time_elapsed(), Tick::ZERO);
    }

    #[test]
    fn admitted_passengers_are_valid_and_queued() {
        let b = Building::new(10, 500);
        let mut rng = SimRng::new(3);
        for id in 1..=500 {
            let p = b.admit(PersonId(id), &mut rng);
            assert_eq!(p.id, PersonId(id));
            assert_ne!(p.origin, p.destination);
            assert!(p.origin.within(10) && p.destination.within(10));
        }
        assert_eq!(b.waiting_count(), 500);
        let state = b.lock();
        for (floor, q) in state.queues() {
            assert!(q.is_consistent_at(floor), "queue at {floor} mixed directions");
        }
    }

    #[test]
    fn two_floor_admission_always_crosses() {
        let b = Building::new(2, 50);
        let mut rng = SimRng::new(11);
        for id in 1..=50 {
            let p = b.admit(PersonId(id), &mut rng);
            let expected = if p.origin == Floor(1) { Direction::Up } else { Direction::Down };
            assert_eq!(p.direction(), expected);
        }
    }

    #[test]
    fn same_seed_same_admissions() {
        let run = |seed| {
            let b = Building::new(8, 20);
            let mut rng = SimRng::new(seed);
            (1..=20).map(|id| b.admit(PersonId(id), &mut rng)).collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn waiting_floors_ascending() {
        let b = Building::new(10, 3);
        b.enqueue(Person::new(PersonId(1), Floor(7), Floor(2)));
        b.enqueue(Person::new(PersonId(2), Floor(3), Floor(4)));
        b.enqueue(Person::new(PersonId(3), Floor(7), Floor(9)));
        assert_eq!(b.waiting_floors(), [Floor(3), Floor(7)]);
        assert_eq!(b.queue_snapshot(Floor(7)), (vec![PersonId(3)], vec![PersonId(1)]));
    }

    #[test]
    fn nearest_waiting_breaks_ties_low() {
        let b = Building::new(10, 2);
        b.enqueue(Person::new(PersonId(1), Floor(3), Floor(4)));
        b.enqueue(Person::new(PersonId(2), Floor(7), Floor(4)));
        let state = b.lock();
        assert_eq!(state.nearest_waiting(Floor(5)), Some(Floor(3)));
        assert_eq!(state.nearest_waiting(Floor(6)), Some(Floor(7)));
        assert_eq!(state.nearest_waiting(Floor(7)), Some(Floor(7)));
    }

    #[test]
    fn nearest_waiting_none_when_empty() {
        let b = Building::new(4, 0);
        assert_eq!(b.lock().nearest_waiting(Floor(2)), None);
    }

    #[test]
    fn counters() {
        let b = Building::new(3, 2);
        assert_eq!(b.record_delivery(), 1);
        assert_eq!(b.record_delivery(), 2);
        assert_eq!(b.people_done(), 2);
        assert_eq!(b.advance_clock(), Tick(1));
        assert_eq!(b.advance_clock(), Tick(2));
        assert_eq!(b.time_elapsed(), Tick(2));
    }
}

#[cfg(test)]
mod event_tests {
    use lift_core::{Direction, ElevatorId, Floor, PersonId, Tick};

    use crate::{LiftEvent, Person};

    #[test]
    fn accessors() {
        let req = LiftEvent::PassengerRequested {
            tick:   Tick(4),
            person: Person::new(PersonId(9), Floor(2), Floor(6)),
        };
        assert_eq!(req.tick(), Tick(4));
        assert_eq!(req.elevator(), None);
        assert_eq!(req.floor(), Floor(2));
        assert_eq!(req.person(), Some(PersonId(9)));
        assert_eq!(req.kind(), "requested");

        let moved = LiftEvent::Moved {
            tick:       Tick(5),
            elevator:   ElevatorId(1),
            from:       Floor(2),
            to:         Floor(3),
            direction:  Direction::Up,
            passengers: 1,
        };
        assert_eq!(moved.elevator(), Some(ElevatorId(1)));
        assert_eq!(moved.floor(), Floor(3));
        assert_eq!(moved.person(), None);
    }

    #[test]
    fn display() {
        let ev = LiftEvent::Boarded {
            tick:        Tick(2),
            elevator:    ElevatorId(1),
            floor:       Floor(3),
            person:      PersonId(4),
            destination: Floor(8),
        };
        assert_eq!(ev.to_string(), "T2 E1 picks up P4 at F3 (to F8)");
    }
}
