//! # portfolio_server - Contact API backend
//!
//! Accepts contact form submissions from the portfolio site, stores them
//! (in memory, optionally persisted to a JSON file) and exposes a small
//! review API over them.
//!
//! ## Usage as Library
//!
//! ```rust,no_run
//! use portfolio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::new()
//!         .with_port(8001)
//!         .with_data_file("messages.json");
//!
//!     run_server(config).await
//! }
//! ```
//!
//! ## Embedding
//!
//! ```rust,no_run
//! use portfolio_server::{ServerConfig, spawn_server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let handle = spawn_server(ServerConfig::new().with_port(0)).await?;
//!     println!("listening on {}", handle.local_addr());
//!
//!     handle.shutdown();
//!     handle.wait().await
//! }
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

// ─────────────────────────────────────────────────────────────────────────────
// Public modules
// ─────────────────────────────────────────────────────────────────────────────

pub mod api;
pub mod config;
pub mod store;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports for convenience
// ─────────────────────────────────────────────────────────────────────────────

pub use api::{AppState, create_router, is_valid_email};
pub use config::{CliOptions, FileConfig, load_config, resolve_config};
pub use store::{ContactMessage, MessageStats, MessageStatus, MessageStore, StoreError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Binary name used in logs
pub const NAME: &str = "portfolio-server";

// ─────────────────────────────────────────────────────────────────────────────
// Library-first configuration builder
// ─────────────────────────────────────────────────────────────────────────────

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host (default: "127.0.0.1")
    pub host: String,
    /// Bind port (default: 8001, 0 picks a free port)
    pub port: u16,
    /// JSON file for message persistence; `None` keeps messages in memory only
    pub data_file: Option<PathBuf>,
    /// Log level (default: "info")
    pub log_level: String,
    /// `limit` used when the list endpoint gets none (default: 50)
    pub default_list_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8001,
            data_file: None,
            log_level: "info".to_string(),
            default_list_limit: 50,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Set log level (trace, debug, info, warn, error).
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_default_list_limit(mut self, limit: usize) -> Self {
        self.default_list_limit = limit;
        self
    }

    /// Parsed `host:port`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }

    /// Open the message store this config points at.
    pub fn open_store(&self) -> Result<MessageStore> {
        match &self.data_file {
            Some(path) => MessageStore::open(path)
                .with_context(|| format!("failed to open message store {}", path.display())),
            None => Ok(MessageStore::in_memory()),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Library entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Run the server until Ctrl+C.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, shutting down");
        }
        signal_token.cancel();
    });
    run_server_with_shutdown(config, shutdown).await
}

/// Run the server until `shutdown` is cancelled.
pub async fn run_server_with_shutdown(
    config: ServerConfig,
    shutdown: CancellationToken,
) -> Result<()> {
    let (listener, app) = bind(&config).await?;
    serve(listener, app, shutdown).await
}

async fn bind(config: &ServerConfig) -> Result<(TcpListener, axum::Router)> {
    let addr = config.socket_addr()?;
    let store = config.open_store()?;
    let app = create_router(AppState::new(store, config.default_list_limit));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    Ok((listener, app))
}

async fn serve(listener: TcpListener, app: axum::Router, shutdown: CancellationToken) -> Result<()> {
    let local = listener.local_addr()?;
    info!("{NAME} {VERSION} listening on http://{local}");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("server error")?;
    info!("{NAME} stopped");
    Ok(())
}

/// Handle for a spawned server.
pub struct ServerHandle {
    shutdown: CancellationToken,
    local_addr: SocketAddr,
    join_handle: tokio::task::JoinHandle<Result<()>>,
}

impl ServerHandle {
    /// Request graceful shutdown.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    /// Address actually bound (useful with port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Wait for the server task to finish.
    pub async fn wait(self) -> Result<()> {
        self.join_handle.await?
    }

    pub fn is_running(&self) -> bool {
        !self.join_handle.is_finished()
    }
}

/// Bind and serve in a background task.
///
/// Binding happens before this returns, so bind errors surface here and
/// [`ServerHandle::local_addr`] is already valid.
pub async fn spawn_server(config: ServerConfig) -> Result<ServerHandle> {
    let (listener, app) = bind(&config).await?;
    let local_addr = listener.local_addr()?;
    let shutdown = CancellationToken::new();
    let token = shutdown.clone();
    let join_handle = tokio::spawn(async move { serve(listener, app, token).await });
    Ok(ServerHandle {
        shutdown,
        local_addr,
        join_handle,
    })
}
