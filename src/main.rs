use anyhow::Context;

mod config;
mod db;
mod error;
mod ingest;
mod models;
mod server;

use config::Config;
use db::Repository;
use server::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging (ingestion summaries are info-level)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Open the store
    let repository = Repository::new(&config.db_path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.db_path))?;

    // Load both datasets and clean up duplicate recipes before serving
    ingest::run(&repository, &config)
        .await
        .context("Ingestion failed")?;

    server::serve(&config.listen_addr, AppState::new(repository))
        .await
        .context("Server failed")?;

    Ok(())
}
