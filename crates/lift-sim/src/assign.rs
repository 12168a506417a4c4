//! Nearest-car pre-assignment.

use lift_core::{Direction, Floor};
use lift_elevator::Elevator;

/// Point each car at the nearest waiting floor it may serve, before the cars
/// step.
///
/// Cars are handled in slice order.  A floor claimed by one car is not given
/// to another in the same tick.  A car heading up only considers floors at
/// or above it, a car heading down only floors at or below; an idle car takes
/// any floor.  Distance ties go to the lower floor.  A car with no eligible
/// floor, or already standing at its target, is set idle.
///
/// `waiting` must be the ascending snapshot from
/// `Building::waiting_floors`.  Returns the floor claimed by each car.
pub fn pre_assign(elevators: &mut [Elevator], waiting: &[Floor]) -> Vec<Option<Floor>> {
    let mut claimed = vec![false; waiting.len()];

    elevators
        .iter_mut()
        .map(|car| {
            let here    = car.current_floor();
            let heading = car.direction();

            let pick = waiting
                .iter()
                .enumerate()
                .filter(|&(i, &floor)| !claimed[i] && heading.admits(here, floor))
                .min_by_key(|&(_, &floor)| (floor.distance(here), floor));

            match pick {
                Some((i, &floor)) => {
                    claimed[i] = true;
                    car.set_direction(Direction::toward(here, floor));
                    Some(floor)
                }
                None => {
                    car.set_direction(Direction::Idle);
                    None
                }
            }
        })
        .collect()
}
