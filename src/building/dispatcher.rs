/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{error, info};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::ElevatorMover;
use crate::shared::{Building, Color, ElevatorRequest, Printer, SimError, SimResult};

/***************************************/
/*               Enums                 */
/***************************************/

/// What happened to a submitted request.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Served end to end by the elevator with this id.
    Dispatched(i32),
    /// No elevator was idle; the request waits in the queue.
    Queued,
    /// Serving the request failed part way; the error was logged.
    Failed(SimError),
}

enum Selection {
    Assigned(i32),
    Queued,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * Assigns rider requests to elevators and drains the waiting queue.
 *
 * `request_elevator` may run on several threads at once. Choosing a car and queueing a request
 * happen under the `pending` lock, so a car is never handed out twice and a request is never
 * queued while a car is free. The chosen car is marked `assigned` for the whole
 * move, load, move, unload cycle.
 *
 * # Fields
 * - `building`:    The building and its elevators.
 * - `mover`:       Drives the individual cars.
 * - `printer`:     Receives the status report.
 * - `pending`:     Requests waiting for a free car, oldest first.
 */
pub struct BuildingDispatcher {
    building: Building,
    mover: ElevatorMover,
    printer: Arc<dyn Printer>,
    pending: Mutex<VecDeque<ElevatorRequest>>,
}

impl BuildingDispatcher {
    pub fn new(
        building: Building,
        mover: ElevatorMover,
        printer: Arc<dyn Printer>,
    ) -> BuildingDispatcher {
        BuildingDispatcher {
            building,
            mover,
            printer,
            pending: Mutex::new(VecDeque::new()),
        }
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn queued_requests(&self) -> usize {
        self.pending().len()
    }

    /// Serves one request, then works through the queue if the request got a car.
    ///
    /// Errors are logged and reported in the outcome, never returned.
    pub fn request_elevator(
        &self,
        current_floor: i32,
        destination_floor: i32,
        passengers: i32,
    ) -> DispatchOutcome {
        let request = ElevatorRequest::new(current_floor, destination_floor, passengers);
        let outcome = self.serve(request);

        if matches!(outcome, DispatchOutcome::Dispatched(_)) {
            self.drain_queue();
        }
        outcome
    }

    pub fn update_building_status(&self) {
        self.printer.line("Building Elevator status:");

        for elevator in self.building.elevators() {
            let car = elevator.snapshot();
            self.printer.colored(
                &format!(
                    "Elevator {}: Floor {}, Passengers {}/{}, Status: {}",
                    car.id,
                    car.current_floor,
                    car.passenger_count,
                    car.max_capacity,
                    car.status()
                ),
                Color::DarkCyan,
            );
        }

        self.printer.colored(
            &format!("Queued requests: {}", self.queued_requests()),
            Color::DarkGreen,
        );
        self.printer
            .colored("Press ENTER to request for an elevator", Color::Yellow);
        self.printer.line("");
    }

    // Picks a car or queues the request, then runs the cycle if a car was picked
    fn serve(&self, request: ElevatorRequest) -> DispatchOutcome {
        let id = match self.select_or_queue(request) {
            Selection::Assigned(id) => id,
            Selection::Queued => return DispatchOutcome::Queued,
        };

        let result = self.dispatch(id, &request);

        if let Some(elevator) = self.building.elevator(id) {
            elevator.lock().assigned = false;
        }

        match result {
            Ok(()) => DispatchOutcome::Dispatched(id),
            Err(e) => {
                error!(
                    "An error occurred while processing an elevator request ({}): {}",
                    request, e
                );
                DispatchOutcome::Failed(e)
            }
        }
    }

    fn select_or_queue(&self, request: ElevatorRequest) -> Selection {
        let mut pending = self.pending();

        let nearest = self
            .building
            .elevators()
            .iter()
            .filter_map(|elevator| {
                let car = elevator.lock();
                car.is_idle()
                    .then(|| (car.id, car.current_floor.abs_diff(request.current_floor)))
            })
            .min_by_key(|(_, distance)| *distance);

        match nearest {
            Some((id, _)) => {
                if let Some(elevator) = self.building.elevator(id) {
                    elevator.lock().assigned = true;
                }
                Selection::Assigned(id)
            }
            None => {
                pending.push_back(request);
                self.building.set_queued_requests(true);
                info!(
                    "Elevator request queued as all elevators are busy ({}).",
                    request
                );
                Selection::Queued
            }
        }
    }

    fn dispatch(&self, id: i32, request: &ElevatorRequest) -> SimResult<()> {
        let elevator = self.building.elevator(id);

        info!(
            "Dispatching Elevator {} to floor {}",
            id, request.current_floor
        );
        self.mover
            .move_to_floor(elevator, request.current_floor)?;
        self.mover.load_passengers(elevator, request.passengers)?;
        self.mover
            .move_to_floor(elevator, request.destination_floor)?;
        self.mover.unload_passengers(elevator, request.passengers)?;
        Ok(())
    }

    // A request that finds no car again goes back to the tail and stops the drain
    fn drain_queue(&self) {
        loop {
            let next = {
                let mut pending = self.pending();
                let next = pending.pop_front();
                if next.is_none() {
                    self.building.set_queued_requests(false);
                }
                next
            };

            let request = match next {
                Some(request) => request,
                None => return,
            };

            info!("Handling queued elevator request ({}).", request);
            if self.serve(request) == DispatchOutcome::Queued {
                return;
            }
        }
    }

    fn pending(&self) -> MutexGuard<'_, VecDeque<ElevatorRequest>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
