//! speedbot Player - composition root binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use speedbot_player::infrastructure::{load_dotenv, PlayerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "speedbot_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting speedbot Player");

    let config = PlayerConfig::from_env()?;
    tracing::info!(server = %config.server_url(), "Configuration loaded");

    let outcome = speedbot_player::run(&config).await?;
    tracing::info!(outcome = %outcome, won = outcome.is_win(), "Game over");

    Ok(())
}
