use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use miniblog::api::PostsClient;
use miniblog::cli::Cli;
use miniblog::logging::init_tracing;
use miniblog::store::PostsStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    let log_path = cli.log_path();
    init_tracing(&log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(base_url = %config.api.base_url, limit = config.api.fetch_limit, "Starting miniblog");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = PostsClient::new(&config.api)?;
    let store = PostsStore::new(client, runtime.handle().clone());

    miniblog::ui::run(store, &config.ui, runtime.handle())?;

    // Requests still in flight are abandoned with the process.
    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}
