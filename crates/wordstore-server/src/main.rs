use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordstore_core::DirectoryStore;
use wordstore_server::{AppState, ServerConfig, serve};

async fn run() -> Result<()> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!("Parsed server config: {:?}", config);

    let store = DirectoryStore::open(&config.store_dir).with_context(|| {
        format!("failed to open store directory {}", config.store_dir.display())
    })?;
    let state = Arc::new(AppState::new(Arc::new(store), config.scan_options()));

    serve(&config, state).await
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
