//! Integration tests for `MemoryStore` and the sweeper.

use std::time::Duration;

use stoa_core::{catalog::CategoryKey, store::SessionStore};
use tokio::time::sleep;

use crate::{MemoryStore, Sweeper};

const SHORT_TIMEOUT: Duration = Duration::from_millis(40);

// ─── Lifecycle ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_mints_unique_ids() {
  let store = MemoryStore::new();
  let a = store.create().await;
  let b = store.create().await;
  assert_ne!(a.session_id, b.session_id);
  assert_eq!(store.active_count().await, 2);
}

#[tokio::test]
async fn get_or_create_is_idempotent_on_the_map() {
  let store = MemoryStore::new();
  store.get_or_create("s1").await;
  store.get_or_create("s1").await;
  assert_eq!(store.active_count().await, 1);
}

#[tokio::test]
async fn status_of_unknown_session_is_none() {
  let store = MemoryStore::new();
  assert!(store.status("nope").await.is_none());
}

#[tokio::test]
async fn delete_reports_existence() {
  let store = MemoryStore::new();
  store.get_or_create("s1").await;
  assert!(store.delete("s1").await);
  assert!(!store.delete("s1").await);
  assert!(store.status("s1").await.is_none());
}

// ─── Expiry ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn idle_session_reports_expired_but_stays_until_swept() {
  let store = MemoryStore::with_timeout(SHORT_TIMEOUT);
  store.get_or_create("s1").await;
  sleep(Duration::from_millis(60)).await;

  let status = store.status("s1").await.unwrap();
  assert!(status.is_expired);
  assert_eq!(status.time_remaining, 0);
  assert_eq!(store.active_count().await, 1);

  assert_eq!(store.sweep().await, 1);
  assert!(store.status("s1").await.is_none());
}

#[tokio::test]
async fn status_does_not_refresh_activity() {
  let store = MemoryStore::with_timeout(SHORT_TIMEOUT);
  store.get_or_create("s1").await;
  sleep(Duration::from_millis(25)).await;

  let first = store.status("s1").await.unwrap();
  sleep(Duration::from_millis(5)).await;
  let second = store.status("s1").await.unwrap();
  assert!(second.time_since_activity >= first.time_since_activity);

  // An actual touch does reset the clock.
  let touched = store.get_or_create("s1").await;
  assert!(touched.time_since_activity < first.time_since_activity);
}

#[tokio::test]
async fn sweep_spares_active_sessions() {
  let store = MemoryStore::with_timeout(SHORT_TIMEOUT);
  store.get_or_create("old").await;
  sleep(Duration::from_millis(60)).await;
  store.get_or_create("fresh").await;

  assert_eq!(store.sweep().await, 1);
  assert!(store.status("old").await.is_none());
  assert!(store.status("fresh").await.is_some());
}

#[tokio::test]
async fn sweeper_task_removes_expired_sessions() {
  let store = MemoryStore::with_timeout(SHORT_TIMEOUT);
  store.get_or_create("s1").await;

  let sweeper = Sweeper::spawn(store.clone(), Duration::from_millis(50));
  sleep(Duration::from_millis(120)).await;

  assert_eq!(store.active_count().await, 0);
  sweeper.shutdown().await;
}

// ─── Question delivery ───────────────────────────────────────────────────────

#[tokio::test]
async fn next_question_walks_the_catalog_once() {
  let store = MemoryStore::new();
  let mut ids = Vec::new();
  loop {
    let (question, _status) = store.next_question("s1").await;
    match question {
      Some(q) => {
        assert!(!ids.contains(&q.id), "repeated {}", q.id);
        ids.push(q.id);
      }
      None => break,
    }
  }
  assert_eq!(ids.len(), 25);
  assert_eq!(ids.first().map(String::as_str), Some("cel_01"));

  let status = store.status("s1").await.unwrap();
  assert_eq!(status.question_tracker.asked_questions.len(), 25);
  assert_eq!(
    status.question_tracker.current_category,
    Some(CategoryKey::Physiological)
  );
}

#[tokio::test]
async fn next_question_creates_the_session_if_absent() {
  let store = MemoryStore::new();
  let (question, status) = store.next_question("fresh").await;
  assert_eq!(question.unwrap().id, "cel_01");
  assert_eq!(status.question_tracker.asked_questions, vec!["cel_01"]);
  assert_eq!(store.active_count().await, 1);
}

#[tokio::test]
async fn record_answer_requires_prior_delivery() {
  let store = MemoryStore::new();
  let status = store.record_answer("s1", "cel_01").await;
  assert!(status.question_tracker.answered_questions.is_empty());

  store.next_question("s1").await;
  let status = store.record_answer("s1", "cel_01").await;
  assert_eq!(status.question_tracker.answered_questions, vec!["cel_01"]);
}
