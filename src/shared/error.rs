/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Failures raised by elevator operations and startup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("out of range: {0}")]
    OutOfRange(String),

    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("passenger underflow: {0}")]
    Underflow(String),

    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),
}

pub type SimResult<T> = Result<T, SimError>;

/// Reasons a line typed by the user is rejected. The messages are shown as-is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Please enter current floor, destination floor, and passenger count.")]
    Malformed,

    #[error("Invalid floor input. Please enter floors within the range of the building.")]
    FloorOutOfRange,

    #[error("Invalid passenger count. Max Capacity is {max_capacity}")]
    PassengerCount { max_capacity: i32 },

    #[error("Current floor and destination floor cannot be the same.")]
    SameFloor,
}
