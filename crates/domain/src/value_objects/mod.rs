//! Value objects - Immutable objects defined by their attributes

mod action;
mod direction;
mod outcome;

pub use action::{Action, MAX_SPEED, MIN_SPEED};
pub use direction::Direction;
pub use outcome::GameOutcome;
