/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Stationary,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    pub fn towards(from: i32, to: i32) -> Direction {
        if from < to {
            Direction::Up
        } else if from > to {
            Direction::Down
        } else {
            Direction::Stationary
        }
    }

    pub fn step(&self) -> i32 {
        match *self {
            Direction::Up => 1,
            Direction::Down => -1,
            Direction::Stationary => 0,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
            Direction::Stationary => write!(f, "Stationary"),
        }
    }
}

/**
 * One elevator car.
 *
 * # Fields
 * - `id`:              Stable identity, 1-based in construction order.
 * - `max_capacity`:    Passenger limit.
 * - `max_floor`:       Highest reachable floor (the building's floor count).
 * - `current_floor`:   Floor the car is at, `0..=max_floor`.
 * - `passenger_count`: Riders on board, `0..=max_capacity`.
 * - `is_moving`:       True while travelling between floors.
 * - `direction`:       Direction of travel, `Stationary` when stopped.
 * - `assigned`:        True while a dispatch owns the car, including stops to load and unload.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    pub id: i32,
    pub max_capacity: i32,
    pub max_floor: i32,
    pub current_floor: i32,
    pub passenger_count: i32,
    pub is_moving: bool,
    pub direction: Direction,
    pub assigned: bool,
}

impl Elevator {
    pub fn new(max_capacity: i32, id: i32, max_floor: i32) -> Elevator {
        Elevator {
            id,
            max_capacity,
            max_floor,
            current_floor: 0,
            passenger_count: 0,
            is_moving: false,
            direction: Direction::Stationary,
            assigned: false,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.is_moving && !self.assigned
    }

    pub fn status(&self) -> &'static str {
        if self.is_moving {
            "Moving"
        } else if self.assigned {
            "Busy"
        } else {
            "Idle"
        }
    }
}

/// An elevator behind its own lock, so status reads and dispatch writes can interleave.
#[derive(Debug)]
pub struct SharedElevator(Mutex<Elevator>);

impl SharedElevator {
    pub fn new(elevator: Elevator) -> SharedElevator {
        SharedElevator(Mutex::new(elevator))
    }

    // Poisoned locks still hold a consistent car, every mutation is a single assignment
    pub fn lock(&self) -> MutexGuard<'_, Elevator> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Elevator {
        self.lock().clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorRequest {
    pub current_floor: i32,
    pub destination_floor: i32,
    pub passengers: i32,
}

impl ElevatorRequest {
    pub fn new(current_floor: i32, destination_floor: i32, passengers: i32) -> ElevatorRequest {
        ElevatorRequest {
            current_floor,
            destination_floor,
            passengers,
        }
    }
}

impl fmt::Display for ElevatorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passenger(s) from floor {} to floor {}",
            self.passengers, self.current_floor, self.destination_floor
        )
    }
}

#[derive(Debug)]
pub struct Building {
    pub n_floors: i32,
    pub n_elevators: i32,
    pub max_capacity: i32,
    elevators: Vec<SharedElevator>,
    has_queued_requests: AtomicBool,
}

impl Building {
    pub fn new(n_floors: i32, n_elevators: i32, max_capacity: i32) -> Building {
        let elevators = (1..=n_elevators)
            .map(|id| SharedElevator::new(Elevator::new(max_capacity, id, n_floors)))
            .collect::<Vec<SharedElevator>>();

        Building {
            n_floors,
            n_elevators,
            max_capacity,
            elevators,
            has_queued_requests: AtomicBool::new(false),
        }
    }

    pub fn elevators(&self) -> &[SharedElevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: i32) -> Option<&SharedElevator> {
        usize::try_from(id - 1)
            .ok()
            .and_then(|index| self.elevators.get(index))
    }

    pub fn has_queued_requests(&self) -> bool {
        self.has_queued_requests.load(Ordering::SeqCst)
    }

    pub(crate) fn set_queued_requests(&self, queued: bool) {
        self.has_queued_requests.store(queued, Ordering::SeqCst);
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use super::{Building, Direction, Elevator};

    #[test]
    fn test_building_constructs_elevators_in_order() {
        // Act
        let building = Building::new(10, 3, 8);

        // Assert
        assert_eq!(building.elevators().len(), 3);
        for (index, elevator) in building.elevators().iter().enumerate() {
            let elevator = elevator.snapshot();
            assert_eq!(elevator.id, index as i32 + 1);
            assert_eq!(elevator.max_capacity, 8);
            assert_eq!(elevator.max_floor, 10);
            assert_eq!(elevator.current_floor, 0);
            assert_eq!(elevator.direction, Direction::Stationary);
            assert!(elevator.is_idle());
        }
        assert!(!building.has_queued_requests());
    }

    #[test]
    fn test_building_elevator_lookup() {
        let building = Building::new(5, 2, 4);

        assert_eq!(building.elevator(1).map(|e| e.snapshot().id), Some(1));
        assert_eq!(building.elevator(2).map(|e| e.snapshot().id), Some(2));
        assert!(building.elevator(0).is_none());
        assert!(building.elevator(3).is_none());
    }

    #[test]
    fn test_elevator_status() {
        let mut elevator = Elevator::new(10, 1, 10);
        assert_eq!(elevator.status(), "Idle");

        elevator.assigned = true;
        assert_eq!(elevator.status(), "Busy");
        assert!(!elevator.is_idle());

        elevator.is_moving = true;
        assert_eq!(elevator.status(), "Moving");
    }

    #[test]
    fn test_direction_towards() {
        assert_eq!(Direction::towards(0, 5), Direction::Up);
        assert_eq!(Direction::towards(5, 0), Direction::Down);
        assert_eq!(Direction::towards(3, 3), Direction::Stationary);
        assert_eq!(Direction::Down.step(), -1);
    }
}
