use std::sync::Arc;

use anyhow::Context;
use course_gateway::{config, handlers, state::AppState, upstream::HttpUpstream};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up UPSTREAM_API_URL, GATEWAY_PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = config::config().clone();
    tracing::info!(
        "Starting course gateway in {:?} mode, upstream {}",
        config.environment,
        config.upstream.base_url
    );

    let upstream = HttpUpstream::new().context("failed to build upstream HTTP client")?;
    let bind_addr = config.bind_addr();
    let app = handlers::router(AppState::new(config, Arc::new(upstream)));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Course gateway listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, keep serving until the process is killed
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
