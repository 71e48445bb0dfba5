pub mod error;
pub mod macros;
pub mod output;
pub mod structs;

pub use error::{InputError, SimError, SimResult};
pub use output::{Color, ConsolePrinter, Printer};
pub use structs::Building;
pub use structs::Direction;
pub use structs::Elevator;
pub use structs::ElevatorRequest;
pub use structs::SharedElevator;
