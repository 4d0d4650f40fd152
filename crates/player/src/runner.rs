use std::sync::Arc;

use speedbot_domain::GameOutcome;

use crate::application::{ActionService, GameSession, SessionError};
use crate::infrastructure::{PlayerConfig, ThreadRngAdapter, WebSocketChannel};
use crate::ports::outbound::{GameChannelPort, RandomPort};

/// Connect with `config` and play one game with thread-local randomness.
pub async fn run(config: &PlayerConfig) -> Result<GameOutcome, SessionError> {
    run_with(config, Arc::new(ThreadRngAdapter::new())).await
}

/// Connect with `config` and play one game drawing from `random`.
///
/// The channel is closed once the session ends, whatever the result.
pub async fn run_with(
    config: &PlayerConfig,
    random: Arc<dyn RandomPort>,
) -> Result<GameOutcome, SessionError> {
    let channel = WebSocketChannel::connect(&config.endpoint()).await?;

    let mut session = GameSession::new(channel, ActionService::new(random));
    let result = session.run().await;

    let mut channel = session.into_channel();
    if let Err(e) = channel.close().await {
        tracing::debug!(error = %e, "Channel did not close cleanly");
    }

    result
}
