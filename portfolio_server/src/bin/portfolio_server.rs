//! portfolio-server CLI binary
//!
//! Thin wrapper over the `portfolio_server` library: parse flags, merge them
//! with the optional config file, install logging and serve until Ctrl+C.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use portfolio_server::config::{CliOptions, load_config, resolve_config};
use portfolio_server::run_server;

/// Contact API backend for the portfolio site.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Cli {
    /// Bind host (default 127.0.0.1).
    #[arg(long, env = "PORTFOLIO_HOST")]
    host: Option<String>,
    /// Bind port (default 8001).
    #[arg(long, env = "PORTFOLIO_PORT")]
    port: Option<u16>,
    /// Optional config file (.json, .toml, .yaml).
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,
    /// JSON file to persist messages to; in-memory only when unset.
    #[arg(long, env = "PORTFOLIO_DATA_FILE")]
    data_file: Option<PathBuf>,
    /// Log level (trace|debug|info|warn|error). RUST_LOG wins when set.
    #[arg(long, env = "PORTFOLIO_LOG_LEVEL")]
    log_level: Option<String>,
    /// Messages returned by the list endpoint when no limit is given.
    #[arg(long)]
    default_list_limit: Option<usize>,
}

impl CliOptions for Cli {
    fn host(&self) -> Option<String> {
        self.host.clone()
    }
    fn port(&self) -> Option<u16> {
        self.port
    }
    fn data_file(&self) -> Option<PathBuf> {
        self.data_file.clone()
    }
    fn log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
    fn default_list_limit(&self) -> Option<usize> {
        self.default_list_limit
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => load_config(path)?,
        None => None,
    };
    let config = resolve_config(&cli, file.as_ref())?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(fmt::layer().with_target(false))
        .init();

    tracing::info!(
        host = %config.host,
        port = config.port,
        data_file = ?config.data_file,
        "portfolio-server starting"
    );

    run_server(config).await
}
