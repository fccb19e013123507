use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use common::SystemClock;
use tracing::info;
use tracing_subscriber::EnvFilter;

use station_server::config::AppConfig;
use station_server::state::AppState;
use station_server::{build_router, database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("Failed to load config")?;

    let db = database::init_db(&config.database.url)
        .await
        .context("Failed to initialize database")?;

    let clock = SystemClock::from_offset_minutes(config.numbering.utc_offset_minutes)
        .context("numbering.utc_offset_minutes out of range")?;
    info!(
        utc_offset_minutes = config.numbering.utc_offset_minutes,
        "Document numbering configured"
    );

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server.host/server.port")?;

    let state = AppState {
        db,
        config,
        clock: Arc::new(clock),
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
