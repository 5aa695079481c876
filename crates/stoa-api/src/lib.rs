//! JSON REST API for the Stoa persona-chat and assessment service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`SessionStore`](stoa_core::store::SessionStore) and
//! [`ChatRelay`](stoa_core::relay::ChatRelay). Transport and TLS concerns
//! are the caller's responsibility.

pub mod error;
pub mod handlers;

use std::{path::PathBuf, sync::Arc, time::Instant};

use axum::{
  Router,
  routing::{delete, get, post},
};
use serde::Deserialize;
use stoa_core::{relay::ChatRelay, store::SessionStore};
use tower_http::{
  cors::CorsLayer,
  services::{ServeDir, ServeFile},
  trace::TraceLayer,
};

pub use error::ApiError;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// `STOA_*` environment. Every field has a working default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  /// Directory holding the built single-page frontend, if any.
  pub dist_dir:             PathBuf,
  pub api_key:              Option<String>,
  pub model:                String,
  pub max_tokens:           u32,
  pub temperature:          f32,
  pub session_timeout_secs: u64,
  pub sweep_interval_secs:  u64,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "127.0.0.1".to_string(),
      port:                 3001,
      dist_dir:             PathBuf::from("dist"),
      api_key:              None,
      model:                stoa_relay::DEFAULT_MODEL.to_string(),
      max_tokens:           stoa_relay::DEFAULT_MAX_TOKENS,
      temperature:          stoa_relay::DEFAULT_TEMPERATURE,
      session_timeout_secs: 2 * 60,
      sweep_interval_secs:  5 * 60,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S, R> {
  pub store:      Arc<S>,
  pub relay:      Arc<R>,
  pub config:     Arc<ServerConfig>,
  pub started_at: Instant,
}

// Manual impl: `S` and `R` sit behind `Arc`s and need no `Clone` of their own.
impl<S, R> Clone for AppState<S, R> {
  fn clone(&self) -> Self {
    Self {
      store:      Arc::clone(&self.store),
      relay:      Arc::clone(&self.relay),
      config:     Arc::clone(&self.config),
      started_at: self.started_at,
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: the JSON API under `/api`, the health
/// probe, and either the built frontend or a JSON 404 as the fallback.
pub fn router<S, R>(state: AppState<S, R>) -> Router
where
  S: SessionStore + 'static,
  R: ChatRelay + 'static,
{
  let dist = state.config.dist_dir.clone();

  let api = Router::new()
    .route("/session/create", post(handlers::sessions::create::<S, R>))
    .route("/session/{id}/status", get(handlers::sessions::status::<S, R>))
    .route("/session/{id}", delete(handlers::sessions::remove::<S, R>))
    .route("/session/{id}/questions/next", get(handlers::questions::next::<S, R>))
    .route("/session/{id}/questions/evaluate", post(handlers::questions::evaluate::<S, R>))
    .route("/chat", post(handlers::chat::handler::<S, R>));

  let app = Router::new()
    .route("/health", get(handlers::health::handler::<S, R>))
    .nest("/api", api)
    .with_state(state);

  // Client-side routes fall through to index.html when a build exists.
  let app = if dist.join("index.html").is_file() {
    app.fallback_service(
      ServeDir::new(&dist).fallback(ServeFile::new(dist.join("index.html"))),
    )
  } else {
    app.fallback(handlers::spa::missing_frontend)
  };

  app
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}

// ─── Integration tests ────────────────────────────────────────────────────────
