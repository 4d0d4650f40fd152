use serde::{Deserialize, Serialize};

use crate::{Action, Direction};

/// One player's entry in a received game state.
///
/// Only `active` and `speed` are needed to pick a move; the server sends the
/// remaining fields too and they are kept when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub active: bool,
    pub speed: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Revealed by the server once the game is over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl PlayerState {
    pub fn new(active: bool, speed: i32) -> Self {
        Self {
            active,
            speed,
            x: None,
            y: None,
            direction: None,
            name: None,
        }
    }

    /// Actions that keep this player within the speed bounds
    pub fn legal_actions(&self) -> Vec<Action> {
        Action::candidates(self.speed)
    }
}
