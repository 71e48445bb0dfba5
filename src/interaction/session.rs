/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{error, info, warn};
use std::io::BufRead;
use std::sync::Arc;
use std::thread::Builder;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::building::BuildingDispatcher;
use crate::config::InteractionConfig;
use crate::interaction::input::{read_user_input, ReadOutcome, UserCommand};
use crate::interaction::{DispatchSupervisor, PauseSignal, StatusReporter};
use crate::shared::Printer;

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    Continue,
    EndOfInput,
}

/***************************************/
/*             Public API              */
/***************************************/

/**
 * The interactive front end: a background status reporter plus the foreground input loop.
 *
 * Pressing ENTER pauses the status output and asks for a request. A valid request is handed to
 * the dispatch supervisor without waiting for the elevator, then reporting resumes. Input errors
 * keep the prompt open. When input ends, the reporter is stopped and joined, followed by every
 * dispatch still running.
 */
pub struct UserInteraction {
    config: InteractionConfig,
    dispatcher: Arc<BuildingDispatcher>,
    printer: Arc<dyn Printer>,
    pause: PauseSignal,
}

impl UserInteraction {
    pub fn new(
        config: &InteractionConfig,
        dispatcher: Arc<BuildingDispatcher>,
        printer: Arc<dyn Printer>,
    ) -> UserInteraction {
        UserInteraction {
            config: config.clone(),
            dispatcher,
            printer,
            pause: PauseSignal::new(),
        }
    }

    #[cfg(test)]
    pub fn pause_signal(&self) -> PauseSignal {
        self.pause.clone()
    }

    pub fn run<R: BufRead>(&self, mut reader: R) -> std::io::Result<()> {
        let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();
        let reporter = StatusReporter::new(
            &self.config,
            self.dispatcher.clone(),
            self.pause.clone(),
            terminate_rx,
        );
        let reporter_thread = Builder::new()
            .name("status_reporter".into())
            .spawn(move || reporter.run())?;

        let mut supervisor = DispatchSupervisor::new(
            self.dispatcher.clone(),
            self.printer.clone(),
            self.config.max_in_flight,
        );

        loop {
            // Wait for ENTER before taking a request
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => (),
                Err(e) => {
                    warn!("Failed to read from input: {}", e);
                    break;
                }
            }

            self.pause.pause();
            if let Event::EndOfInput = self.handle_user_input(&mut reader, &mut supervisor) {
                break;
            }
        }

        info!("Input closed, shutting down");
        let _ = terminate_tx.send(());
        if reporter_thread.join().is_err() {
            error!("Status reporter panicked");
        }
        supervisor.shutdown();
        self.pause.resume();
        Ok(())
    }

    fn handle_user_input<R: BufRead>(
        &self,
        reader: &mut R,
        supervisor: &mut DispatchSupervisor,
    ) -> Event {
        loop {
            let building = self.dispatcher.building();
            match read_user_input(reader, self.printer.as_ref(), building) {
                ReadOutcome::Command(UserCommand::Request(request)) => {
                    info!("Requesting elevator for {}", request);
                    supervisor.submit(request);
                    self.pause.resume();
                    return Event::Continue;
                }
                ReadOutcome::Command(UserCommand::Cancel) => {
                    self.pause.resume();
                    return Event::Continue;
                }
                ReadOutcome::Invalid(_) => continue,
                ReadOutcome::EndOfInput => return Event::EndOfInput,
            }
        }
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
