//! WebSocket message types for server-player communication
//!
//! ## Compatibility
//!
//! - Unknown fields in server messages are ignored
//! - Optional server fields (`cells`, `deadline`, positions, ...) may be absent

use serde::{Deserialize, Serialize};
use speedbot_domain::{Action, GameState};

use crate::ProtocolError;

// =============================================================================
// Server Messages (Server → Player)
// =============================================================================

/// The only message the server sends: a full game snapshot
pub type ServerMessage = GameState;

/// Decode one inbound text frame into a game snapshot.
pub fn decode_state(text: &str) -> Result<ServerMessage, ProtocolError> {
    serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, len = text.len(), "Rejected server message");
        ProtocolError::Decode(e)
    })
}

// =============================================================================
// Client Messages (Player → Server)
// =============================================================================

/// Answer to one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMessage {
    pub action: Action,
}

impl ClientMessage {
    pub fn new(action: Action) -> Self {
        Self { action }
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}

/// Encode the answer text for `action`.
pub fn encode_action(action: Action) -> Result<String, ProtocolError> {
    ClientMessage::new(action).to_json()
}
