//! Portfolio - personal portfolio site server.
//!
//! Serves an about-me page, a grid of project cards, and an embedded resume
//! viewer. Profile image and resume are resolved from local asset folders
//! first and fall back to a raw-content URL on the remote repository.

use portfolio::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let default_filter = if cli::is_verbose() {
        "portfolio=info"
    } else {
        "portfolio=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    cli::run().await
}
