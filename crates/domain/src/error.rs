//! Unified error types for the domain layer
//!
//! Domain operations never perform I/O, so the only failures are lookups
//! against a received state and parsing of wire vocabulary.

use thiserror::Error;

use crate::PlayerId;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested player id is not a key of the state's `players` map
    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create a player-not-found error
    pub fn player_not_found(player_id: PlayerId) -> Self {
        Self::PlayerNotFound { player_id }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for Action {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "speed_up" => Ok(Self::SpeedUp),
    ///             _ => Err(DomainError::parse(format!("Unknown action: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Check if this is a player lookup failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PlayerNotFound { .. })
    }
}
