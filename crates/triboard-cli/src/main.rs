mod cli;
mod context;
mod handlers;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use context::CliContext;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use triboard_core::AppConfig;
use triboard_persistence::{BoardRepository, JsonFileKvStore};
use triboard_tui::App;

fn init_logging() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TRIBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        let filter =
            EnvFilter::try_from_env("TRIBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();

    let mut config = AppConfig::load();
    if let Some(store) = cli.store {
        config.storage_path = Some(store);
    }
    if let Some(key) = cli.key {
        config.storage_key = Some(key);
    }
    let store_path = config.effective_storage_path();
    let key = config.effective_storage_key().to_string();

    match cli.command {
        None => {
            tracing::info!("Opening board '{}' from {}", key, store_path.display());
            let repository = BoardRepository::new(Arc::new(JsonFileKvStore::new(&store_path)), key);
            let mut app = App::load(repository, config).await;
            app.run().await?;
        }
        Some(command) => {
            let loaded = match command {
                Commands::Reset => Ok(CliContext::open(&store_path, &key)),
                _ => CliContext::load(&store_path, &key).await,
            };
            let result = match loaded {
                Ok(mut ctx) => handlers::handle(&mut ctx, command).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                output::output_error(&e.to_string());
            }
        }
    }

    Ok(())
}
