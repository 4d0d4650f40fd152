//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod action_service;
pub mod session_service;

pub use action_service::ActionService;
pub use session_service::{Decision, GameSession, SessionError, SessionState};
