//! speedbot Shared - wire format of the spe_ed game protocol
//!
//! The server pushes one JSON game state per round; the client answers with
//! one JSON object naming its action. This crate owns both directions:
//!
//! - `decode_state`: inbound text into `speedbot_domain::GameState`
//! - `ClientMessage` / `encode_action`: the outbound answer
//!
//! No I/O happens here; transports live in the player crate.

pub mod error;
pub mod messages;

pub use error::ProtocolError;
pub use messages::{decode_state, encode_action, ClientMessage, ServerMessage};
