//! stoa-api server binary.
//!
//! Reads `config.toml` (or the path given with `--config`) plus `STOA_*`
//! environment overrides, builds the in-memory session store and the
//! Anthropic relay, and serves the JSON API over HTTP.

use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::Parser;
use stoa_api::{AppState, ServerConfig};
use stoa_relay::{AnthropicRelay, RelayConfig};
use stoa_store_memory::{MemoryStore, Sweeper};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Stoa persona-chat API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("STOA"))
    .build()
    .context("failed to read config file")?;

  let mut server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // The upstream provider's conventional variable also works.
  if server_cfg.api_key.is_none() {
    server_cfg.api_key = std::env::var("CLAUDE_API_KEY").ok();
  }

  let api_key_loaded = server_cfg.api_key.is_some();
  tracing::info!(api_key_loaded, "API key loaded: {}", if api_key_loaded { "yes" } else { "no" });
  if server_cfg.dist_dir.exists() {
    tracing::info!(dist = %server_cfg.dist_dir.display(), "serving static files from dist folder");
  } else {
    tracing::warn!("dist folder not found - running in development mode");
  }

  // Build the session store and its background sweeper.
  let session_timeout = Duration::from_secs(server_cfg.session_timeout_secs);
  let store = MemoryStore::with_timeout(session_timeout);
  let sweeper = Sweeper::spawn(
    store.clone(),
    Duration::from_secs(server_cfg.sweep_interval_secs),
  );

  // Build the relay.
  let relay = AnthropicRelay::new(RelayConfig {
    api_key:     server_cfg.api_key.clone(),
    model:       server_cfg.model.clone(),
    max_tokens:  server_cfg.max_tokens,
    temperature: server_cfg.temperature,
  })
  .context("failed to build model API client")?;

  let state = AppState {
    store:      Arc::new(store),
    relay:      Arc::new(relay),
    config:     Arc::new(server_cfg.clone()),
    started_at: Instant::now(),
  };

  let app = stoa_api::router(state);
  let address = format!("{}:{}", server_cfg.host, server_cfg.port);

  tracing::info!(
    session_timeout_secs = server_cfg.session_timeout_secs,
    "Listening on http://{address}"
  );
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("server error")?;

  sweeper.shutdown().await;
  tracing::info!("shut down cleanly");

  Ok(())
}

async fn shutdown_signal() {
  // Errors here mean the signal handler could not be installed; in that
  // case run until killed.
  if tokio::signal::ctrl_c().await.is_err() {
    std::future::pending::<()>().await;
  }
}
