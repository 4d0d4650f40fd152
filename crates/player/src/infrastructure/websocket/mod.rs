//! WebSocket transport for the game channel
//!
//! - `client`: tokio-tungstenite based `GameChannelPort` implementation

mod client;

pub use client::WebSocketChannel;
