//! Handlers for the trigger-question endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/session/:id/questions/next` | Delivers the next unasked question |
//! | `POST` | `/api/session/:id/questions/evaluate` | Body: `{userResponse, question}` |
//!
//! Both endpoints auto-create the session, mirroring the chat path.

use axum::{
  Json,
  extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use stoa_core::{
  evaluate::{self, Evaluation},
  relay::ChatRelay,
  sequencer::AskedQuestion,
  store::SessionStore,
};

use crate::AppState;

// ─── Next question ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionBody {
  /// `null` once every question in every category has been asked.
  pub next_question:  Option<AskedQuestion>,
  pub session_id:     String,
  pub time_remaining: i64,
}

/// `GET /api/session/:id/questions/next`
pub async fn next<S, R>(
  State(state): State<AppState<S, R>>,
  Path(id): Path<String>,
) -> Json<NextQuestionBody>
where
  S: SessionStore,
  R: ChatRelay,
{
  let (next_question, status) = state.store.next_question(&id).await;
  Json(NextQuestionBody {
    next_question,
    session_id: status.session_id,
    time_remaining: status.time_remaining,
  })
}

// ─── Evaluate ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateBody {
  pub user_response: String,
  /// The delivered question, posted back verbatim by the client.
  pub question:      AskedQuestion,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResponse {
  pub evaluation:     Evaluation,
  pub session_id:     String,
  pub time_remaining: i64,
}

/// `POST /api/session/:id/questions/evaluate`
///
/// The question counts as answered only when the verdict is determinate;
/// mixed or absent signals leave it open.
pub async fn evaluate<S, R>(
  State(state): State<AppState<S, R>>,
  Path(id): Path<String>,
  Json(body): Json<EvaluateBody>,
) -> Json<EvaluateResponse>
where
  S: SessionStore,
  R: ChatRelay,
{
  let evaluation = evaluate::evaluate(&body.user_response, &body.question);

  let status = if evaluation.triggered.is_some() {
    state.store.record_answer(&id, &body.question.id).await
  } else {
    state.store.get_or_create(&id).await
  };

  tracing::debug!(
    session_id = %status.session_id,
    question_id = %evaluation.question_id,
    triggered = ?evaluation.triggered,
    confidence = ?evaluation.confidence,
    "evaluated response"
  );

  Json(EvaluateResponse {
    evaluation,
    session_id: status.session_id,
    time_remaining: status.time_remaining,
  })
}
