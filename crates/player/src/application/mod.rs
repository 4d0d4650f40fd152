//! Application layer - the game session use case

pub mod services;

pub use services::{ActionService, Decision, GameSession, SessionError, SessionState};
