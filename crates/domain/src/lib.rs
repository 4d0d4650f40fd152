//! speedbot Domain - vocabulary shared by the wire protocol and the player.
//!
//! Pure types and rules only: no I/O, no randomness, no async.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{GameState, PlayerState};
pub use error::DomainError;
pub use ids::PlayerId;
pub use value_objects::{Action, Direction, GameOutcome, MAX_SPEED, MIN_SPEED};
