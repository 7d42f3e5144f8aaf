//! Tunelith Web - marketing website and contact form server.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tunelith_core::FileMessageStore;
use tunelith_web::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = FileMessageStore::new(&config.data_dir);
    let addr = config.socket_addr();

    tracing::info!("Starting Tunelith web app on port {}", config.port);
    tracing::info!(
        "Messages are saved to {} and {}",
        store.transcript_path().display(),
        store.json_path().display()
    );
    if config.is_development() {
        tracing::debug!("Development mode: error pages include details");
    }

    let state = AppState::new(Arc::new(store), config.is_development());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
