// Main entry point for the QuickFetch server

use anyhow::{Context, Result};
use quickfetch_core::{kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,quickfetch_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting QuickFetch");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(source = %config.posts_source_url, "Configuration loaded");

    // Build application
    let deps = ServerDeps::from_config(&config);
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Home page: http://localhost:{}/", config.port);
    tracing::info!("Echo API: http://localhost:{}/api/echo", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
