// ABOUTME: Entry point for the tallybook binary.
// ABOUTME: Parses CLI arguments, initializes tracing, opens the record store, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tallybook_server::{AppState, TallybookConfig, create_router};
use tallybook_store::RecordStore;

/// Minimal expense tracker backed by a single JSON file.
#[derive(Debug, Parser)]
#[command(name = "tallybook", version, about)]
struct Cli {
    /// Socket address to listen on (overrides TALLYBOOK_BIND).
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Path of the JSON file holding all records (overrides TALLYBOOK_DATA_PATH).
    #[arg(long)]
    data_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tallybook=debug,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();
    let mut config = TallybookConfig::from_env().context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.bind = bind;
    }
    if let Some(data_path) = cli.data_path {
        config.data_path = data_path;
    }

    let store = RecordStore::open(&config.data_path).with_context(|| {
        format!("failed to open record store at {}", config.data_path.display())
    })?;
    let state = Arc::new(AppState::new(store));
    let app = create_router(state, config.auth_token.clone());

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!("tallybook listening on http://{}", config.bind);

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
