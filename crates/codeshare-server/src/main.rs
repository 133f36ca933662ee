use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use codeshare_server::config::ServerConfig;
use codeshare_server::state::{AppState, build_store};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Settings may come from a config.env next to the binary.
    let dotenv = dotenvy::from_filename("config.env");

    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to read config.env"),
    }

    let config = ServerConfig::from_env()?;
    if !config.store.is_durable() {
        tracing::warn!(
            "CODESHARE_STORE_URL is memory://; snippets will be lost when the process exits"
        );
    }
    let store = build_store(&config).await;

    // An unreachable store is not fatal: requests fail with 500 until it comes back.
    match store.ping().await {
        Ok(()) => tracing::info!(store = ?config.store, "connected to snippet store"),
        Err(e) => tracing::error!(store = ?config.store, error = %e, "snippet store unreachable"),
    }

    let app = codeshare_server::app(AppState::new(store));

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "CodeShare server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
