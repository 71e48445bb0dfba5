pub mod dispatcher;

pub use dispatcher::BuildingDispatcher;
pub use dispatcher::DispatchOutcome;
