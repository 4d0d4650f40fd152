//! Game Channel Port - duplex text channel to the game server
//!
//! The session owns its channel exclusively and strictly alternates
//! `recv_text` and `send_text`; implementations never see concurrent calls.

use async_trait::async_trait;

/// Transport-level failure of the game channel
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    /// The endpoint could not be reached or refused the handshake
    #[error("Failed to connect: {0}")]
    Connect(String),

    /// The server closed the channel
    #[error("Connection closed")]
    Closed,

    /// The underlying socket failed mid-session
    #[error("Transport error: {0}")]
    Transport(String),

    /// A frame arrived that cannot be read as text
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),
}

/// Port for the authenticated duplex channel a game is played over
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait GameChannelPort: Send {
    /// Wait for the next text message. No timeout is applied.
    async fn recv_text(&mut self) -> Result<String, ChannelError>;

    /// Send one text message and flush it.
    async fn send_text(&mut self, text: String) -> Result<(), ChannelError>;

    /// Close the channel. Closing an already closed channel succeeds.
    async fn close(&mut self) -> Result<(), ChannelError>;
}
