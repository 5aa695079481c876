//! `GET /health` — liveness and deployment sanity in one payload.

use axum::{Json, extract::State};
use serde::Serialize;
use stoa_core::{relay::ChatRelay, store::SessionStore};

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
  pub status:          &'static str,
  pub api_key_loaded:  bool,
  pub active_sessions: usize,
  /// Seconds since process start.
  pub uptime:          f64,
  pub dist_exists:     bool,
}

pub async fn handler<S, R>(
  State(state): State<AppState<S, R>>,
) -> Json<Health>
where
  S: SessionStore,
  R: ChatRelay,
{
  Json(Health {
    status:          "ok",
    api_key_loaded:  state.relay.is_configured(),
    active_sessions: state.store.active_count().await,
    uptime:          state.started_at.elapsed().as_secs_f64(),
    dist_exists:     state.config.dist_dir.exists(),
  })
}
