//! Menagerie - interactive manager for a collection of magical creatures.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod clock;
mod config;
mod prompt;
mod table;

use clock::SystemClock;
use config::{AppConfig, DEFAULT_LOG_FILTER};

fn main() -> anyhow::Result<()> {
    config::load_dotenv();

    // Logs go to stderr so they never interleave with the menu.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(preconfigured = config.max_creatures.is_some(), "Starting menagerie");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app::run(stdin.lock(), stdout.lock(), SystemClock, &config)
        .context("Interactive session failed")?;

    tracing::info!("Session ended");
    Ok(())
}
