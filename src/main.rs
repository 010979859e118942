//! Variant Classification Relay
//!
//! HTTP service that accepts batches of genetic variants, queries an
//! upstream classification API concurrently and returns the reshaped results

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use variantproxy::config::settings::LoggingConfig;
use variantproxy::config::Settings;
use variantproxy::handlers::create_router;

#[tokio::main]
async fn main() -> Result<()> {
    // Load settings from environment (defaults match the deployed behavior)
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("Server settings loaded");

    // Create router
    let app = create_router(settings.clone()).await?;

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🚀 Variant classification relay started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("🧬 Classify endpoint: http://{}/classify_variants/", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Initialize logging system
///
/// Events go to stdout and to an append-mode log file. The subscriber is
/// constructed and installed here once, not mutated elsewhere.
fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("Failed to open log file {}", config.file))?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    info!("Logging system initialized");
    Ok(())
}
