pub mod mover;

pub use mover::ElevatorMover;
