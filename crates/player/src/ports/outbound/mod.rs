//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the game session to run against a real socket or a mock.

pub mod game_channel_port;
pub mod random_port;

pub use game_channel_port::{ChannelError, GameChannelPort};
pub use random_port::RandomPort;

#[cfg(any(test, feature = "testing"))]
pub use game_channel_port::MockGameChannelPort;
#[cfg(any(test, feature = "testing"))]
pub use random_port::MockRandomPort;
