//! The `SessionStore` trait.
//!
//! Implemented by session backends (e.g. `stoa-store-memory`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.
//!
//! The contract is infallible by design: a session store either has a
//! session or it does not, and every mutating operation is a small
//! read-modify-write the backend performs under its own lock. Mutation is
//! confined to these methods; callers only ever see owned
//! [`SessionStatus`] snapshots.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (tokio with axum).

use std::future::Future;

use crate::{sequencer::AskedQuestion, session::SessionStatus};

pub trait SessionStore: Send + Sync {
  /// Mint a fresh session with a new opaque id and return its status.
  fn create(&self) -> impl Future<Output = SessionStatus> + Send + '_;

  /// Fetch a session, creating it if absent, and refresh its activity
  /// timestamp either way.
  fn get_or_create<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = SessionStatus> + Send + 'a;

  /// Read-only status lookup. Does **not** refresh the activity timestamp,
  /// so repeated calls are idempotent. `None` if the session is unknown.
  fn status<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Option<SessionStatus>> + Send + 'a;

  /// Remove a session. Returns whether it existed.
  fn delete<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = bool> + Send + 'a;

  /// Advance the session's question sequencer (creating the session if
  /// absent): deliver the next unasked question, or `None` once the
  /// catalog is exhausted. The returned status reflects the delivery.
  fn next_question<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = (Option<AskedQuestion>, SessionStatus)> + Send + 'a;

  /// Mark a previously asked question as answered (creating the session
  /// if absent). Ids that were never asked are ignored.
  fn record_answer<'a>(
    &'a self,
    id: &'a str,
    question_id: &'a str,
  ) -> impl Future<Output = SessionStatus> + Send + 'a;

  /// Number of live (not yet swept) sessions.
  fn active_count(&self) -> impl Future<Output = usize> + Send + '_;

  /// Drop every session idle longer than the timeout; returns how many
  /// were removed.
  fn sweep(&self) -> impl Future<Output = usize> + Send + '_;
}
