//! Entities received from the game server

mod game_state;
mod player_state;

pub use game_state::GameState;
pub use player_state::PlayerState;
