//! `POST /api/chat` — relay a transcript to the persona model.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use stoa_core::{
  evaluate,
  relay::{ChatRelay, ChatTurn, Role},
  store::SessionStore,
};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatBody {
  #[serde(default)]
  pub messages:   Vec<ChatTurn>,
  pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
  pub response:       String,
  pub session_id:     String,
  pub time_remaining: i64,
}

/// `POST /api/chat` — body: `{"messages":[{role,content}],"sessionId":...}`
///
/// Auto-creates the session. The whole call is a single awaited relay
/// round-trip: no retry, no streaming, no cancellation.
pub async fn handler<S, R>(
  State(state): State<AppState<S, R>>,
  Json(body): Json<ChatBody>,
) -> Result<Json<ChatResponse>, ApiError>
where
  S: SessionStore,
  R: ChatRelay,
{
  let session_id = body
    .session_id
    .ok_or_else(|| ApiError::Validation("Session ID is required".to_string()))?;

  let status = state.store.get_or_create(&session_id).await;

  tracing::info!(
    session_id = %session_id,
    message_count = body.messages.len(),
    has_system = body.messages.iter().any(|m| m.role == Role::System),
    "received chat request"
  );

  // Keyword-spot the latest user turn; purely observational.
  if let Some(latest) =
    body.messages.iter().rev().find(|m| m.role == Role::User)
  {
    for hit in evaluate::detect_in_message(&latest.content) {
      tracing::debug!(
        category = %hit.category,
        question_id = %hit.question_id,
        confidence = ?hit.confidence,
        "trigger indicators in chat message"
      );
    }
  }

  if !state.relay.is_configured() {
    return Err(ApiError::Upstream {
      message: "Model API key not configured. Please set STOA_API_KEY in the environment.".to_string(),
      details: None,
    });
  }

  let response = state.relay.relay(&body.messages).await.map_err(|e| {
    tracing::error!(error = %e, "error calling model API");
    ApiError::Upstream {
      message: "Failed to get response from model API".to_string(),
      details: Some(e.to_string()),
    }
  })?;

  Ok(Json(ChatResponse {
    response,
    session_id,
    time_remaining: status.time_remaining,
  }))
}
