//! The `MemoryStore` — a keyed session map with lazily computed expiry.

use std::{collections::HashMap, sync::Arc, time::Duration};

use chrono::Utc;
use stoa_core::{
  sequencer::AskedQuestion,
  session::{IDLE_TIMEOUT, Session, SessionStatus},
  store::SessionStore,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory [`SessionStore`] backend.
///
/// Cheap to clone — clones share the same underlying map, so the sweeper
/// can hold its own handle.
#[derive(Clone)]
pub struct MemoryStore {
  sessions: Arc<RwLock<HashMap<String, Session>>>,
  timeout:  Duration,
}

impl MemoryStore {
  /// A store with the reference idle timeout of two minutes.
  pub fn new() -> Self {
    Self::with_timeout(IDLE_TIMEOUT)
  }

  pub fn with_timeout(timeout: Duration) -> Self {
    Self { sessions: Arc::new(RwLock::new(HashMap::new())), timeout }
  }

  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

impl Default for MemoryStore {
  fn default() -> Self {
    Self::new()
  }
}

impl SessionStore for MemoryStore {
  async fn create(&self) -> SessionStatus {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();
    let session = Session::new(now);
    let status = session.status(&id, now, self.timeout);

    self.sessions.write().await.insert(id.clone(), session);
    tracing::info!(session_id = %id, "created new session");
    status
  }

  async fn get_or_create(&self, id: &str) -> SessionStatus {
    let now = Utc::now();
    let mut sessions = self.sessions.write().await;
    let session = sessions.entry(id.to_string()).or_insert_with(|| {
      tracing::info!(session_id = %id, "created new session");
      Session::new(now)
    });
    session.touch(now);
    session.status(id, now, self.timeout)
  }

  async fn status(&self, id: &str) -> Option<SessionStatus> {
    let sessions = self.sessions.read().await;
    sessions
      .get(id)
      .map(|session| session.status(id, Utc::now(), self.timeout))
  }

  async fn delete(&self, id: &str) -> bool {
    let removed = self.sessions.write().await.remove(id).is_some();
    if removed {
      tracing::info!(session_id = %id, "deleted session");
    }
    removed
  }

  async fn next_question(&self, id: &str) -> (Option<AskedQuestion>, SessionStatus) {
    let now = Utc::now();
    let mut sessions = self.sessions.write().await;
    let session = sessions.entry(id.to_string()).or_insert_with(|| {
      tracing::info!(session_id = %id, "created new session");
      Session::new(now)
    });
    session.touch(now);

    let question = session.tracker.next_question();
    match &question {
      Some(q) => {
        tracing::debug!(session_id = %id, question_id = %q.id, category = %q.category, "delivered question")
      }
      None => tracing::debug!(session_id = %id, "question catalog exhausted"),
    }
    (question, session.status(id, now, self.timeout))
  }

  async fn record_answer(&self, id: &str, question_id: &str) -> SessionStatus {
    let now = Utc::now();
    let mut sessions = self.sessions.write().await;
    let session = sessions.entry(id.to_string()).or_insert_with(|| {
      tracing::info!(session_id = %id, "created new session");
      Session::new(now)
    });
    session.touch(now);

    if !session.tracker.record_answer(question_id) {
      tracing::warn!(session_id = %id, question_id, "ignoring answer for a question that was never asked");
    }
    session.status(id, now, self.timeout)
  }

  async fn active_count(&self) -> usize {
    self.sessions.read().await.len()
  }

  async fn sweep(&self) -> usize {
    let now = Utc::now();
    let mut sessions = self.sessions.write().await;
    let before = sessions.len();
    sessions.retain(|id, session| {
      let keep = !session.is_expired(now, self.timeout);
      if !keep {
        tracing::info!(session_id = %id, "cleaned up expired session");
      }
      keep
    });
    before - sessions.len()
  }
}
