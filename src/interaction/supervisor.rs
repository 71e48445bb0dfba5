/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{error, info};
use std::any::Any;
use std::collections::VecDeque;
use std::sync::Arc;
use std::thread::{Builder, JoinHandle};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::{BuildingDispatcher, DispatchOutcome};
use crate::shared::{ElevatorRequest, Printer};

/**
 * Runs dispatches in the background and owns their outcome.
 *
 * Each request gets its own thread so the input loop never waits for an elevator. At most
 * `max_in_flight` handles are tracked; submitting past the bound first joins the oldest dispatch.
 * Panicking dispatches are reported through the printer when their handle is joined.
 *
 * # Fields
 * - `dispatcher`:      Shared dispatcher the threads call into.
 * - `printer`:         Receives error reports.
 * - `max_in_flight`:   Bound on tracked dispatch threads.
 * - `in_flight`:       Handles of started dispatches, oldest first.
 * - `next_id`:         Sequence number used for thread names.
 */
pub struct DispatchSupervisor {
    dispatcher: Arc<BuildingDispatcher>,
    printer: Arc<dyn Printer>,
    max_in_flight: usize,
    in_flight: VecDeque<JoinHandle<DispatchOutcome>>,
    next_id: u64,
}

impl DispatchSupervisor {
    pub fn new(
        dispatcher: Arc<BuildingDispatcher>,
        printer: Arc<dyn Printer>,
        max_in_flight: usize,
    ) -> DispatchSupervisor {
        DispatchSupervisor {
            dispatcher,
            printer,
            max_in_flight: max_in_flight.max(1),
            in_flight: VecDeque::new(),
            next_id: 0,
        }
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Starts serving `request` on a new thread and returns immediately.
    pub fn submit(&mut self, request: ElevatorRequest) {
        self.reap_finished();
        while self.in_flight.len() >= self.max_in_flight {
            if let Some(oldest) = self.in_flight.pop_front() {
                self.settle(oldest);
            }
        }

        self.next_id += 1;
        let dispatcher = self.dispatcher.clone();
        let spawned = Builder::new()
            .name(format!("dispatch_{}", self.next_id))
            .spawn(move || {
                dispatcher.request_elevator(
                    request.current_floor,
                    request.destination_floor,
                    request.passengers,
                )
            });

        match spawned {
            Ok(handle) => self.in_flight.push_back(handle),
            Err(e) => {
                error!("Failed to start dispatch thread: {}", e);
                self.printer
                    .line(&format!("An error occurred: {}", e));
            }
        }
    }

    /// Waits for every started dispatch to finish.
    pub fn shutdown(&mut self) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::new();
        while let Some(handle) = self.in_flight.pop_front() {
            if let Some(outcome) = self.settle(handle) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }

    fn reap_finished(&mut self) {
        let (finished, running): (Vec<_>, Vec<_>) = self
            .in_flight
            .drain(..)
            .partition(|handle| handle.is_finished());
        self.in_flight = running.into();

        for handle in finished {
            self.settle(handle);
        }
    }

    fn settle(&self, handle: JoinHandle<DispatchOutcome>) -> Option<DispatchOutcome> {
        let name = handle.thread().name().unwrap_or("dispatch").to_string();
        match handle.join() {
            Ok(outcome) => {
                info!("{} finished: {:?}", name, outcome);
                Some(outcome)
            }
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!("{} panicked: {}", name, message);
                self.printer
                    .line(&format!("An error occurred: {}", message));
                None
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "dispatch thread panicked".to_string()
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod supervisor_tests {
    use super::{panic_message, DispatchSupervisor};
    use crate::building::{BuildingDispatcher, DispatchOutcome};
    use crate::config::ElevatorConfig;
    use crate::elevator::ElevatorMover;
    use crate::shared::output::RecordingPrinter;
    use crate::shared::{Building, ElevatorRequest};
    use std::sync::Arc;

    fn setup_supervisor(max_in_flight: usize) -> (DispatchSupervisor, Arc<BuildingDispatcher>) {
        let printer = Arc::new(RecordingPrinter::default());
        let dispatcher = Arc::new(BuildingDispatcher::new(
            Building::new(10, 2, 10),
            ElevatorMover::new(&ElevatorConfig { floor_travel_time: 1 }),
            printer.clone(),
        ));
        (
            DispatchSupervisor::new(dispatcher.clone(), printer, max_in_flight),
            dispatcher,
        )
    }

    #[test]
    fn test_submitted_requests_complete_on_shutdown() {
        // Arrange
        let (mut supervisor, dispatcher) = setup_supervisor(8);

        // Act
        supervisor.submit(ElevatorRequest::new(0, 5, 3));
        supervisor.submit(ElevatorRequest::new(2, 7, 1));
        let outcomes = supervisor.shutdown();

        // Assert
        assert_eq!(outcomes.len(), 2);
        assert_eq!(supervisor.in_flight(), 0);
        for outcome in outcomes {
            assert!(!matches!(outcome, DispatchOutcome::Failed(_)));
        }
        assert_eq!(dispatcher.queued_requests(), 0);
    }

    #[test]
    fn test_in_flight_is_bounded() {
        // Arrange
        let (mut supervisor, _dispatcher) = setup_supervisor(2);

        // Act + Assert
        for floor in 1..=5 {
            supervisor.submit(ElevatorRequest::new(0, floor, 1));
            assert!(supervisor.in_flight() <= 2);
        }

        // Cleanup
        supervisor.shutdown();
    }

    #[test]
    fn test_panic_message() {
        let from_str: Box<dyn std::any::Any + Send> = Box::new("boom");
        let from_string: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));

        assert_eq!(panic_message(from_str.as_ref()), "boom");
        assert_eq!(panic_message(from_string.as_ref()), "bang");
    }
}
