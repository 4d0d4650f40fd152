//! Snapshot of a game as the server sends it each round

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, GameOutcome, PlayerId, PlayerState};

/// Read-only game snapshot.
///
/// A fresh snapshot arrives every round; nothing in it is carried over to
/// the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Row-major board: `0` free, `-1` collision, `n` trail of player `n`
    #[serde(default)]
    pub cells: Vec<Vec<i8>>,
    /// Players keyed by the decimal form of their id
    pub players: BTreeMap<String, PlayerState>,
    /// Id of the player receiving this snapshot
    pub you: PlayerId,
    pub running: bool,
    /// Answer deadline for the current round, absent once the game is over
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

impl GameState {
    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Result<&PlayerState, DomainError> {
        self.players
            .get(&id.as_key())
            .ok_or_else(|| DomainError::player_not_found(id))
    }

    /// The player receiving this snapshot.
    pub fn me(&self) -> Result<&PlayerState, DomainError> {
        self.player(self.you)
    }

    pub fn active_count(&self) -> usize {
        self.players.values().filter(|p| p.active).count()
    }

    /// Whether the local player has nothing left to answer, and why.
    ///
    /// The local player must be present in every snapshot, finished or not.
    /// `Ok(None)` means the game is running, the player is still in, and
    /// this round needs an answer.
    pub fn outcome(&self) -> Result<Option<GameOutcome>, DomainError> {
        let me = self.me()?;
        if !self.running {
            return Ok(Some(self.final_outcome(me)));
        }
        if !me.active {
            return Ok(Some(GameOutcome::Eliminated));
        }
        Ok(None)
    }

    fn final_outcome(&self, me: &PlayerState) -> GameOutcome {
        match (me.active, self.active_count()) {
            (_, 0) => GameOutcome::Draw,
            (true, 1) => GameOutcome::Won,
            (true, _) => GameOutcome::Draw,
            (false, _) => GameOutcome::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(running: bool, you: u32, players: &[(&str, bool, i32)]) -> GameState {
        GameState {
            width: 0,
            height: 0,
            cells: Vec::new(),
            players: players
                .iter()
                .map(|(id, active, speed)| (id.to_string(), PlayerState::new(*active, *speed)))
                .collect(),
            you: PlayerId::new(you),
            running,
            deadline: None,
        }
    }

    #[test]
    fn test_player_lookup_uses_string_key() {
        let s = state(true, 2, &[("1", true, 1), ("2", true, 7)]);
        assert_eq!(s.me().unwrap().speed, 7);
        assert_eq!(s.player(PlayerId::new(1)).unwrap().speed, 1);
    }

    #[test]
    fn test_missing_player_is_lookup_error() {
        let s = state(true, 1, &[]);
        let err = s.me().unwrap_err();
        assert_eq!(err, DomainError::player_not_found(PlayerId::new(1)));
    }

    #[test]
    fn test_running_and_active_has_no_outcome() {
        let s = state(true, 1, &[("1", true, 1), ("2", true, 1)]);
        assert_eq!(s.outcome().unwrap(), None);
    }

    #[test]
    fn test_inactive_in_running_game_is_eliminated() {
        let s = state(true, 1, &[("1", false, 1), ("2", true, 1), ("3", true, 1)]);
        assert_eq!(s.outcome().unwrap(), Some(GameOutcome::Eliminated));
    }

    #[test]
    fn test_running_game_without_me_is_lookup_error() {
        let s = state(true, 1, &[("2", true, 1)]);
        assert!(s.outcome().unwrap_err().is_not_found());
    }

    #[test]
    fn test_finished_game_without_me_is_lookup_error() {
        let s = state(false, 1, &[]);
        assert_eq!(
            s.outcome().unwrap_err(),
            DomainError::player_not_found(PlayerId::new(1))
        );

        let others_only = state(false, 1, &[("2", true, 1)]);
        assert!(others_only.outcome().unwrap_err().is_not_found());
    }

    #[test]
    fn test_finished_game_outcomes() {
        let won = state(false, 1, &[("1", true, 3), ("2", false, 1)]);
        assert_eq!(won.outcome().unwrap(), Some(GameOutcome::Won));

        let lost = state(false, 1, &[("1", false, 3), ("2", true, 1)]);
        assert_eq!(lost.outcome().unwrap(), Some(GameOutcome::Lost));

        let draw = state(false, 1, &[("1", false, 3), ("2", false, 1)]);
        assert_eq!(draw.outcome().unwrap(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_decodes_full_server_snapshot() {
        let json = r#"{
            "width": 3,
            "height": 2,
            "cells": [[0, 1, 0], [-1, 0, 2]],
            "players": {
                "1": {"x": 1, "y": 0, "direction": "up", "speed": 1, "active": true},
                "2": {"x": 2, "y": 1, "direction": "left", "speed": 2, "active": true, "name": "bot"}
            },
            "you": 1,
            "running": true,
            "deadline": "2021-01-15T12:00:05Z"
        }"#;
        let s: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(s.width, 3);
        assert_eq!(s.cells[1][0], -1);
        assert_eq!(s.me().unwrap().direction, Some(crate::Direction::Up));
        assert_eq!(
            s.player(PlayerId::new(2)).unwrap().name.as_deref(),
            Some("bot")
        );
        assert!(s.deadline.is_some());
    }

    #[test]
    fn test_decodes_minimal_snapshot() {
        let json = r#"{"running": true, "you": 0, "players": {"0": {"active": true, "speed": 5}}}"#;
        let s: GameState = serde_json::from_str(json).unwrap();
        assert!(s.cells.is_empty());
        assert_eq!(s.deadline, None);
        assert_eq!(s.me().unwrap().legal_actions().len(), 5);
    }
}
