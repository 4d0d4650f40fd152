//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, plus
//! environment configuration.

pub mod config;
pub mod random_adapter;
pub mod websocket;

pub use config::{load_dotenv, ConfigError, PlayerConfig};
pub use random_adapter::ThreadRngAdapter;
pub use websocket::WebSocketChannel;
