//! Handlers for session lifecycle endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/api/session/create` | Mints a fresh session id |
//! | `GET`    | `/api/session/:id/status` | Read-only; never refreshes activity |
//! | `DELETE` | `/api/session/:id` | 404 if unknown |

use axum::{
  Json,
  extract::{Path, State},
};
use serde::Serialize;
use serde_json::{Value, json};
use stoa_core::{relay::ChatRelay, session::SessionStatus, store::SessionStore};

use crate::{AppState, error::ApiError};

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Created {
  pub session_id: String,
}

/// `POST /api/session/create`
pub async fn create<S, R>(State(state): State<AppState<S, R>>) -> Json<Created>
where
  S: SessionStore,
  R: ChatRelay,
{
  let status = state.store.create().await;
  Json(Created { session_id: status.session_id })
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// `GET /api/session/:id/status`
///
/// Expiry and remaining time are computed from the stored timestamp; the
/// lookup itself does not count as activity, so polling is side-effect free.
pub async fn status<S, R>(
  State(state): State<AppState<S, R>>,
  Path(id): Path<String>,
) -> Result<Json<SessionStatus>, ApiError>
where
  S: SessionStore,
  R: ChatRelay,
{
  let status = state
    .store
    .status(&id)
    .await
    .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;
  Ok(Json(status))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /api/session/:id`
pub async fn remove<S, R>(
  State(state): State<AppState<S, R>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: SessionStore,
  R: ChatRelay,
{
  if state.store.delete(&id).await {
    Ok(Json(json!({ "success": true })))
  } else {
    Err(ApiError::NotFound("Session not found".to_string()))
  }
}
