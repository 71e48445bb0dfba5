/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::BuildingDispatcher;
use crate::config::InteractionConfig;
use crate::interaction::PauseSignal;

/**
 * Periodically prints the building status.
 *
 * While the pause signal is set the reporter only rechecks it every `pause_poll`. Otherwise it
 * prints a report and waits `status_interval`. Both waits end early when a message arrives on
 * (or the sender of) `terminate_rx`, and the reporter returns.
 *
 * # Fields
 * - `dispatcher`:          Source of the status report.
 * - `pause`:               Shared pause switch, set by the input loop.
 * - `status_interval`:     Wait after each printed report.
 * - `pause_poll`:          Wait between checks while paused.
 * - `terminate_rx`:        Shutdown signal.
 */
pub struct StatusReporter {
    dispatcher: Arc<BuildingDispatcher>,
    pause: PauseSignal,
    status_interval: Duration,
    pause_poll: Duration,
    terminate_rx: cbc::Receiver<()>,
}

impl StatusReporter {
    pub fn new(
        config: &InteractionConfig,
        dispatcher: Arc<BuildingDispatcher>,
        pause: PauseSignal,
        terminate_rx: cbc::Receiver<()>,
    ) -> StatusReporter {
        StatusReporter {
            dispatcher,
            pause,
            status_interval: Duration::from_millis(config.status_interval),
            pause_poll: Duration::from_millis(config.pause_poll),
            terminate_rx,
        }
    }

    pub fn run(self) {
        loop {
            let wait = if self.pause.is_paused() {
                self.pause_poll
            } else {
                self.dispatcher.update_building_status();
                self.status_interval
            };

            cbc::select! {
                recv(self.terminate_rx) -> _ => break,
                default(wait) => {}
            }
        }
        debug!("Status reporter terminated");
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod status_tests {
    use super::StatusReporter;
    use crate::building::BuildingDispatcher;
    use crate::config::{ElevatorConfig, InteractionConfig};
    use crate::elevator::ElevatorMover;
    use crate::interaction::PauseSignal;
    use crate::shared::output::RecordingPrinter;
    use crate::shared::Building;
    use crossbeam_channel::unbounded;
    use std::sync::Arc;
    use std::thread::{sleep, Builder};
    use std::time::Duration;

    fn setup_reporter(
        pause: PauseSignal,
    ) -> (StatusReporter, Arc<RecordingPrinter>, crossbeam_channel::Sender<()>) {
        let printer = Arc::new(RecordingPrinter::default());
        let dispatcher = Arc::new(BuildingDispatcher::new(
            Building::new(4, 1, 4),
            ElevatorMover::new(&ElevatorConfig { floor_travel_time: 0 }),
            printer.clone(),
        ));
        let config = InteractionConfig {
            status_interval: 10,
            pause_poll: 5,
            max_in_flight: 4,
        };
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        (
            StatusReporter::new(&config, dispatcher, pause, terminate_rx),
            printer,
            terminate_tx,
        )
    }

    fn reports(printer: &RecordingPrinter) -> usize {
        printer
            .texts()
            .iter()
            .filter(|text| *text == "Building Elevator status:")
            .count()
    }

    #[test]
    fn test_reporter_prints_until_terminated() {
        // Arrange
        let (reporter, printer, terminate_tx) = setup_reporter(PauseSignal::new());

        // Act
        let reporter_thread = Builder::new()
            .name("status_reporter".into())
            .spawn(move || reporter.run())
            .unwrap();
        sleep(Duration::from_millis(100));
        terminate_tx.send(()).unwrap();
        reporter_thread.join().unwrap();

        // Assert
        let printed = reports(&printer);
        assert!(printed >= 2, "only {} reports", printed);

        sleep(Duration::from_millis(30));
        assert_eq!(reports(&printer), printed);
    }

    #[test]
    fn test_reporter_is_silent_while_paused() {
        // Arrange
        let pause = PauseSignal::new();
        pause.pause();
        let (reporter, printer, terminate_tx) = setup_reporter(pause.clone());

        // Act
        let reporter_thread = Builder::new()
            .name("status_reporter".into())
            .spawn(move || reporter.run())
            .unwrap();
        sleep(Duration::from_millis(50));
        let while_paused = reports(&printer);

        pause.resume();
        sleep(Duration::from_millis(50));

        // Cleanup
        drop(terminate_tx);
        reporter_thread.join().unwrap();

        // Assert
        assert_eq!(while_paused, 0);
        assert!(reports(&printer) >= 1);
    }
}
