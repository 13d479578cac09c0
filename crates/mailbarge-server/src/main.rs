//! Mailbarge Server - search proxy entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use mailbarge_common::logging::{init_logging, LogConfig};
use mailbarge_server::config::Config;
use mailbarge_server::folders::FolderService;
use mailbarge_server::routes::{router, AppState};
use mailbarge_server::search::SearchService;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut log_config = LogConfig::from_env()?;
    log_config.file_prefix = "mailbarge-server".to_string();
    init_logging(&log_config)?;

    info!("Starting mailbarge server");

    // Fails fast on missing destination credentials.
    let config = Config::load()?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        index = %config.server.index,
        "Configuration loaded"
    );

    let client = reqwest::Client::new();
    let state = AppState {
        search: Arc::new(SearchService::new(
            client,
            config.zinc.clone(),
            &config.server.index,
        )),
        folders: Arc::new(FolderService::new(&config.server.corpus_root)),
    };

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");

    Ok(())
}

/// Resolve when the process receives a shutdown signal.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
