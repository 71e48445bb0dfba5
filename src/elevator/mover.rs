/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, error, info};
use std::thread::sleep;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ElevatorConfig;
use crate::shared::{Direction, SharedElevator, SimError, SimResult};

/**
 * Drives a single elevator through moves, loads and unloads.
 *
 * Every operation validates its arguments before touching the car, so a rejected call leaves the
 * elevator exactly as it was. The car's lock is only held for one state change at a time; it is
 * released while the car travels between floors so the status reporter can observe the movement.
 *
 * # Fields
 * - `floor_travel_time`:   Time spent travelling one floor.
 */
#[derive(Debug, Clone)]
pub struct ElevatorMover {
    floor_travel_time: Duration,
}

impl ElevatorMover {
    pub fn new(config: &ElevatorConfig) -> ElevatorMover {
        ElevatorMover {
            floor_travel_time: Duration::from_millis(config.floor_travel_time),
        }
    }

    /// Moves the car one floor at a time to `destination_floor`.
    ///
    /// Returns the number of floors travelled, which is also the number of travel delays taken.
    pub fn move_to_floor(
        &self,
        elevator: Option<&SharedElevator>,
        destination_floor: i32,
    ) -> SimResult<u32> {
        let elevator = elevator.ok_or_else(|| {
            error!("Attempted to move a missing elevator.");
            SimError::InvalidArgument("elevator".into())
        })?;

        let (id, direction) = {
            let mut car = elevator.lock();
            if destination_floor < 0 || destination_floor > car.max_floor {
                error!(
                    "Destination floor {} is out of range for elevator {}.",
                    destination_floor, car.id
                );
                return Err(SimError::OutOfRange(format!(
                    "destination floor {} is outside 0..={}",
                    destination_floor, car.max_floor
                )));
            }

            info!(
                "Elevator {} is moving from floor {} to floor {}.",
                car.id, car.current_floor, destination_floor
            );

            car.is_moving = true;
            car.direction = Direction::towards(car.current_floor, destination_floor);
            debug!("Elevator {} direction set to {}.", car.id, car.direction);
            (car.id, car.direction)
        };

        let mut floors_travelled = 0;
        loop {
            {
                let mut car = elevator.lock();
                if car.current_floor == destination_floor {
                    car.is_moving = false;
                    car.direction = Direction::Stationary;
                    break;
                }
                car.current_floor += direction.step();
                debug!("Elevator {} is at floor {}.", id, car.current_floor);
            }

            floors_travelled += 1;
            sleep(self.floor_travel_time);
        }

        info!(
            "Elevator {} reached the destination floor {}.",
            id, destination_floor
        );
        Ok(floors_travelled)
    }

    pub fn load_passengers(&self, elevator: Option<&SharedElevator>, count: i32) -> SimResult<()> {
        let elevator = elevator.ok_or_else(|| {
            error!("Attempted to load passengers into a missing elevator.");
            SimError::InvalidArgument("elevator".into())
        })?;
        check_count(count)?;

        let mut car = elevator.lock();
        let total = car.passenger_count.checked_add(count);
        if total.map_or(true, |total| total > car.max_capacity) {
            error!(
                "Loading {} passengers would exceed elevator {}'s capacity.",
                count, car.id
            );
            return Err(SimError::CapacityExceeded(format!(
                "{} on board plus {} exceeds {}",
                car.passenger_count, count, car.max_capacity
            )));
        }

        car.passenger_count += count;
        info!(
            "Loaded {} passengers into elevator {}. Total passengers now: {}.",
            count, car.id, car.passenger_count
        );
        Ok(())
    }

    pub fn unload_passengers(
        &self,
        elevator: Option<&SharedElevator>,
        count: i32,
    ) -> SimResult<()> {
        let elevator = elevator.ok_or_else(|| {
            error!("Attempted to unload passengers from a missing elevator.");
            SimError::InvalidArgument("elevator".into())
        })?;
        check_count(count)?;

        let mut car = elevator.lock();
        if count > car.passenger_count {
            error!(
                "Unloading {} passengers would result in a negative count for elevator {}.",
                count, car.id
            );
            return Err(SimError::Underflow(format!(
                "cannot unload {} with {} on board",
                count, car.passenger_count
            )));
        }

        car.passenger_count -= count;
        info!(
            "Unloaded {} passengers from elevator {}. Total passengers now: {}.",
            count, car.id, car.passenger_count
        );
        Ok(())
    }
}

fn check_count(count: i32) -> SimResult<()> {
    if count < 0 {
        error!("Attempted to move a negative number of passengers.");
        return Err(SimError::OutOfRange(format!(
            "passenger count {} is negative",
            count
        )));
    }
    Ok(())
}
