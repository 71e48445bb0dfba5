/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportingState {
    Reporting,
    Paused,
}

impl ReportingState {
    fn to_u8(self) -> u8 {
        match self {
            ReportingState::Reporting => 0,
            ReportingState::Paused => 1,
        }
    }
}

impl From<u8> for ReportingState {
    fn from(item: u8) -> Self {
        match item {
            0 => ReportingState::Reporting,
            _ => ReportingState::Paused,
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Shared switch that silences the status reporter while the user is typing.
///
/// Clones observe the same state.
#[derive(Debug, Clone)]
pub struct PauseSignal {
    state: Arc<AtomicU8>,
}

impl Default for PauseSignal {
    fn default() -> Self {
        PauseSignal {
            state: Arc::new(AtomicU8::new(ReportingState::Reporting.to_u8())),
        }
    }
}

impl PauseSignal {
    pub fn new() -> PauseSignal {
        PauseSignal::default()
    }

    pub fn state(&self) -> ReportingState {
        ReportingState::from(self.state.load(Ordering::SeqCst))
    }

    pub fn is_paused(&self) -> bool {
        self.state() == ReportingState::Paused
    }

    pub fn pause(&self) {
        self.state
            .store(ReportingState::Paused.to_u8(), Ordering::SeqCst);
    }

    pub fn resume(&self) {
        self.state
            .store(ReportingState::Reporting.to_u8(), Ordering::SeqCst);
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
