//! Unit tests for the elevator state machine.

use lift_building::{Building, LiftEvent, Person};
use lift_core::{CAPACITY, Direction, ElevatorId, Floor, PersonId, Tick};

use crate::{Elevator, StepOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(id: u32, origin: u32, destination: u32) -> Person {
    Person::new(PersonId(id), Floor(origin), Floor(destination))
}

fn car_at(floor: u32) -> Elevator {
    Elevator::new(ElevatorId(1), Floor(floor))
}

fn rider_ids(car: &Elevator) -> Vec<u32> {
    car.passengers().iter().map(|p| p.id.0).collect()
}

#[cfg(test)]
mod idle_tests {
    use super::*;

    #[test]
    fn idle_empty_car_skips_when_nobody_waits() {
        let building = Building::new(5, 0);
        let mut car = car_at(3);
        let mut events = Vec::new();
        assert_eq!(car.step(&building, Tick(0), &mut events), StepOutcome::Skipped);
        assert!(events.is_empty());
        assert_eq!(car.current_floor(), Floor(3));
        assert!(car.is_at_rest());
    }

    #[test]
    fn idle_car_wakes_for_remote_demand() {
        let building = Building::new(5, 1);
        building.enqueue(person(1, 4, 1));
        let mut car = car_at(1);
        let mut events = Vec::new();
        assert_eq!(car.step(&building, Tick(0), &mut events), StepOutcome::Moved);
        assert_eq!(car.current_floor(), Floor(2));
        assert_eq!(car.direction(), Direction::Up);
        assert!(matches!(events.as_slice(), [LiftEvent::Moved { from: Floor(1), to: Floor(2), .. }]));
    }

    #[test]
    fn empty_car_heads_for_nearest_floor_low_on_ties() {
        let building = Building::new(9, 2);
        building.enqueue(person(1, 3, 9));
        building.enqueue(person(2, 7, 1));
        let mut car = car_at(5);
        car.update_direction(&building);
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn empty_car_with_no_demand_goes_idle() {
        let building = Building::new(4, 0);
        let mut car = car_at(2);
        car.set_direction(Direction::Up);
        car.update_direction(&building);
        assert_eq!(car.direction(), Direction::Idle);
    }
}

#[cfg(test)]
mod boarding_tests {
    use super::*;

    #[test]
    fn idle_car_boards_both_queues_and_dwells() {
        let building = Building::new(6, 2);
        building.enqueue(person(1, 3, 6));
        building.enqueue(person(2, 3, 1));
        let mut car = car_at(3);
        let mut events = Vec::new();

        assert_eq!(car.step(&building, Tick(0), &mut events), StepOutcome::Dwelled);
        assert_eq!(car.current_floor(), Floor(3));
        assert_eq!(rider_ids(&car), [1, 2]);
        assert!(!building.has_any_waiting());

        let kinds: Vec<_> = events.iter().map(LiftEvent::kind).collect();
        assert_eq!(kinds, ["boarded", "boarded", "dwelled"]);
    }

    #[test]
    fn directional_car_leaves_opposite_queue_alone() {
        let building = Building::new(6, 2);
        building.enqueue(person(1, 3, 6));
        building.enqueue(person(2, 3, 1));
        let mut car = car_at(3);
        car.set_direction(Direction::Down);
        let mut events = Vec::new();

        car.step(&building, Tick(0), &mut events);
        assert_eq!(rider_ids(&car), [2]);
        assert_eq!(building.queue_snapshot(Floor(3)), (vec![PersonId(1)], vec![]));
    }

    #[test]
    fn alighting_happens_before_boarding_in_one_tick() {
        let building = Building::new(6, 2);
        let mut car = car_at(1);
        building.enqueue(person(1, 1, 4));
        car.step(&building, Tick(0), &mut Vec::new());
        // Ride to floor 4.
        for t in 1..=3 {
            assert_eq!(car.step(&building, Tick(t), &mut Vec::new()), StepOutcome::Moved);
        }
        assert_eq!(car.current_floor(), Floor(4));

        building.enqueue(person(2, 4, 2));
        car.set_direction(Direction::Idle);
        let mut events = Vec::new();
        assert_eq!(car.step(&building, Tick(4), &mut events), StepOutcome::Dwelled);

        let kinds: Vec<_> = events.iter().map(LiftEvent::kind).collect();
        assert_eq!(kinds, ["disembarked", "boarded", "dwelled"]);
        assert_eq!(rider_ids(&car), [2]);
        assert_eq!(building.people_done(), 1);
        assert_eq!(car.stats().delivered, 1);
        assert_eq!(car.stats().boarded, 2);
    }

    #[test]
    fn overflow_waits_for_a_later_visit() {
        let building = Building::new(3, 6);
        for id in 1..=6 {
            building.enqueue(person(id, 1, 3));
        }
        let mut car = car_at(1);
        car.set_direction(Direction::Up);

        let mut events = Vec::new();
        assert_eq!(car.step(&building, Tick(0), &mut events), StepOutcome::Dwelled);
        assert_eq!(car.passenger_count(), CAPACITY);
        assert_eq!(rider_ids(&car), [1, 2, 3, 4, 5]);
        assert_eq!(building.queue_snapshot(Floor(1)), (vec![PersonId(6)], vec![]));

        // Full car cannot take the sixth passenger, so it leaves.
        assert_eq!(car.step(&building, Tick(1), &mut Vec::new()), StepOutcome::Moved);
        assert_eq!(building.waiting_count(), 1);

        let mut picked_up_at = None;
        for t in 2..30 {
            car.step(&building, Tick(t), &mut events);
            if rider_ids(&car) == [6] {
                picked_up_at = Some(t);
                break;
            }
        }
        assert!(picked_up_at.is_some(), "sixth passenger never boarded");
        assert_eq!(building.people_done(), 5);
        assert!(!building.has_any_waiting());
    }

    #[test]
    fn never_exceeds_capacity() {
        let building = Building::new(4, 20);
        for id in 1..=20 {
            building.enqueue(person(id, 2, 1 + (id % 2) * 2));
        }
        let mut car = car_at(2);
        for t in 0..200 {
            car.step(&building, Tick(t), &mut Vec::new());
            assert!(car.passenger_count() <= CAPACITY, "over capacity at tick {t}");
        }
        assert_eq!(building.people_done(), 20);
    }
}

#[cfg(test)]
mod direction_tests {
    use super::*;

    fn loaded_car(floor: u32, destinations: &[u32]) -> (Building, Elevator) {
        let building = Building::new(10, destinations.len() as u32);
        for (i, &dest) in destinations.iter().enumerate() {
            building.enqueue(person(i as u32 + 1, floor, dest));
        }
        let mut car = car_at(floor);
        car.step(&building, Tick(0), &mut Vec::new());
        assert_eq!(car.passenger_count(), destinations.len());
        (building, car)
    }

    #[test]
    fn riders_all_above_send_car_up() {
        let (building, mut car) = loaded_car(4, &[6, 9]);
        car.update_direction(&building);
        assert_eq!(car.direction(), Direction::Up);
    }

    #[test]
    fn riders_all_below_send_car_down() {
        let (building, mut car) = loaded_car(4, &[1, 2]);
        car.update_direction(&building);
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn mixed_riders_keep_heading_or_start_up() {
        let (building, mut car) = loaded_car(4, &[1, 9]);
        car.set_direction(Direction::Idle);
        car.update_direction(&building);
        assert_eq!(car.direction(), Direction::Up);

        car.set_direction(Direction::Down);
        car.update_direction(&building);
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn riders_override_remote_demand() {
        let (building, mut car) = loaded_car(4, &[8]);
        building.enqueue(person(99, 2, 1));
        car.update_direction(&building);
        assert_eq!(car.direction(), Direction::Up);
    }

    #[test]
    fn car_travels_to_destination_and_stops() {
        let (building, mut car) = loaded_car(2, &[5]);
        let mut events = Vec::new();
        for t in 1..=3 {
            assert_eq!(car.step(&building, Tick(t), &mut events), StepOutcome::Moved);
        }
        assert_eq!(car.current_floor(), Floor(5));
        assert_eq!(car.step(&building, Tick(4), &mut events), StepOutcome::Dwelled);
        assert_eq!(car.passenger_count(), 0);
        assert_eq!(car.stats().floors_travelled, 3);
        assert!(matches!(
            events.last(),
            Some(LiftEvent::Dwelled { floor: Floor(5), passengers: 0, .. })
        ));
    }
}
