pub mod input;
pub mod pause;
pub mod session;
pub mod status;
pub mod supervisor;

pub use pause::{PauseSignal, ReportingState};
pub use session::UserInteraction;
pub use status::StatusReporter;
pub use supervisor::DispatchSupervisor;
