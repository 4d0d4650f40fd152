use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the server assigns to each player of a game.
///
/// On the wire it appears twice: as the integer `you` field and as the
/// string keys of the `players` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u32);

impl PlayerId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The key this player is stored under in `GameState::players`.
    pub fn as_key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
