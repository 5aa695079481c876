//! The `ChatRelay` trait — the boundary to the external language model.
//!
//! The relay is an opaque collaborator: ordered role-tagged turns in, one
//! reply out, or a typed failure. Persona prompting, generation budgets,
//! and transport live behind the implementation (`stoa-relay`).

use std::future::Future;

use serde::{Deserialize, Serialize};

/// Who produced a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Assistant,
  /// Accepted on the wire but never forwarded upstream; the persona's own
  /// system instruction always takes precedence.
  System,
}

/// One turn of a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
  pub role:    Role,
  pub content: String,
}

pub trait ChatRelay: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Whether the relay has the credential it needs. Checked before
  /// dispatching so an unconfigured deployment fails fast with a clear
  /// message instead of a transport error.
  fn is_configured(&self) -> bool;

  /// Forward the transcript to the model and return its single reply.
  /// No retries, no cancellation: the call runs to completion or failure.
  fn relay<'a>(
    &'a self,
    turns: &'a [ChatTurn],
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + 'a;
}
