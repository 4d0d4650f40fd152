use serde::{Deserialize, Serialize};
use std::fmt;

/// How a game ended from the local player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// Game over and we are the only player still active
    Won,
    /// Game over and nobody is active
    Draw,
    /// Game over and another player survived
    Lost,
    /// The game goes on without us
    Eliminated,
}

impl GameOutcome {
    pub fn is_win(&self) -> bool {
        matches!(self, GameOutcome::Won)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Won => write!(f, "won"),
            GameOutcome::Draw => write!(f, "draw"),
            GameOutcome::Lost => write!(f, "lost"),
            GameOutcome::Eliminated => write!(f, "eliminated"),
        }
    }
}
