//! speedbot Player crate.
//!
//! Plays one spe_ed game over a websocket, answering each round with a
//! uniformly random legal action.
//!
//! - `ports`: channel and randomness contracts
//! - `application`: the game session and action selection
//! - `infrastructure`: websocket, RNG and configuration adapters
//! - `runner`: wires the adapters into a session

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;

// Re-export commonly used entrypoints
pub use application::{GameSession, SessionError};
pub use infrastructure::PlayerConfig;
pub use runner::{run, run_with};
