//! HostelHaven AI Daemon - sentiment analysis service
//!
//! Serves /health, /analyze and /batch-analyze over HTTP.

use anyhow::Result;
use clap::Parser;
use haven_common::{LexiconScorer, Normalizer, SharedScorer};
use havend::config::ServiceConfig;
use havend::logging;
use havend::server::{self, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "havend")]
#[command(about = "HostelHaven AI - sentiment analysis service", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: /etc/hostelhaven/ai-service.toml if present)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Listening port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Enable debug logging (overrides FLASK_DEBUG)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ServiceConfig::load_from(path)?,
        None => ServiceConfig::load()?,
    };
    config.apply_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.debug {
        config.server.debug = true;
    }

    logging::init_tracing(config.logging.json, config.server.debug);

    let scorer: SharedScorer = Arc::new(LexiconScorer::new());
    let normalizer = Normalizer::new(scorer);
    info!(
        "Starting HostelHaven AI Service on port {} (scorer: {}, debug: {})",
        config.server.port,
        normalizer.scorer_name(),
        config.server.debug
    );

    server::run(AppState::new(normalizer, config)).await
}
