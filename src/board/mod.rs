//! Loop board layout and movement

pub mod layout;
pub mod movement;

pub use layout::{Board, Square, SquareKind};
pub use movement::{advance, MoveOutcome};
