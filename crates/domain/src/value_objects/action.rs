//! Actions a player can answer a round with

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Lowest speed the server keeps a player alive at
pub const MIN_SPEED: i32 = 1;

/// Highest speed the server keeps a player alive at
pub const MAX_SPEED: i32 = 10;

/// One answer to a game round.
///
/// The server rejects anything outside this set and deactivates the sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    TurnLeft,
    TurnRight,
    ChangeNothing,
    SpeedUp,
    SlowDown,
}

impl Action {
    /// All actions in wire order
    pub fn all() -> &'static [Action] {
        &[
            Action::TurnLeft,
            Action::TurnRight,
            Action::ChangeNothing,
            Action::SpeedUp,
            Action::SlowDown,
        ]
    }

    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::TurnLeft => "turn_left",
            Action::TurnRight => "turn_right",
            Action::ChangeNothing => "change_nothing",
            Action::SpeedUp => "speed_up",
            Action::SlowDown => "slow_down",
        }
    }

    /// Actions that keep a player at `speed` inside the speed bounds.
    ///
    /// Steering and `change_nothing` are always offered, so the result is
    /// never empty. Speeds outside `MIN_SPEED..=MAX_SPEED` are not clamped:
    /// the strict comparisons apply as-is.
    pub fn candidates(speed: i32) -> Vec<Action> {
        let mut actions = vec![Action::TurnLeft, Action::TurnRight, Action::ChangeNothing];
        if speed < MAX_SPEED {
            actions.push(Action::SpeedUp);
        }
        if speed > MIN_SPEED {
            actions.push(Action::SlowDown);
        }
        actions
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "turn_left" => Ok(Action::TurnLeft),
            "turn_right" => Ok(Action::TurnRight),
            "change_nothing" => Ok(Action::ChangeNothing),
            "speed_up" => Ok(Action::SpeedUp),
            "slow_down" => Ok(Action::SlowDown),
            other => Err(DomainError::parse(format!("Unknown action: {}", other))),
        }
    }
}
