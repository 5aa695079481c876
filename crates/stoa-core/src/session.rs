//! Session state and expiry math.
//!
//! A session is nothing more than a question tracker and a last-activity
//! timestamp. Expiry is computed on demand from the timestamp; there is no
//! per-session timer.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::sequencer::{QuestionTracker, TrackerSnapshot};

/// How long a session may sit idle before it is considered expired.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60);

/// How often the store sweeps expired sessions.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

// ─── Session ─────────────────────────────────────────────────────────────────

/// Transient per-session state. Not persisted across restarts.
#[derive(Debug, Clone)]
pub struct Session {
  pub tracker:       QuestionTracker,
  pub last_activity: DateTime<Utc>,
}

impl Session {
  pub fn new(now: DateTime<Utc>) -> Self {
    Self { tracker: QuestionTracker::default(), last_activity: now }
  }

  /// Refresh the activity timestamp.
  pub fn touch(&mut self, now: DateTime<Utc>) {
    self.last_activity = now;
  }

  /// Milliseconds since the last activity. Clamped at zero in case the
  /// clock moved backwards between calls.
  pub fn idle_ms(&self, now: DateTime<Utc>) -> i64 {
    (now - self.last_activity).num_milliseconds().max(0)
  }

  pub fn is_expired(&self, now: DateTime<Utc>, timeout: Duration) -> bool {
    self.idle_ms(now) > timeout.as_millis() as i64
  }

  /// Compute the wire-shaped status snapshot for this session.
  pub fn status(
    &self,
    session_id: &str,
    now: DateTime<Utc>,
    timeout: Duration,
  ) -> SessionStatus {
    let idle = self.idle_ms(now);
    let timeout_ms = timeout.as_millis() as i64;
    SessionStatus {
      session_id:          session_id.to_string(),
      is_expired:          idle > timeout_ms,
      time_since_activity: idle,
      time_remaining:      (timeout_ms - idle).max(0),
      question_tracker:    self.tracker.snapshot(),
    }
  }
}

// ─── Status snapshot ─────────────────────────────────────────────────────────

/// Owned, read-only view of a session, in wire shape. Times are in
/// milliseconds; `time_remaining` never goes negative.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
  pub session_id:          String,
  pub is_expired:          bool,
  pub time_since_activity: i64,
  pub time_remaining:      i64,
  pub question_tracker:    TrackerSnapshot,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeDelta;

  #[test]
  fn fresh_session_reports_full_time_remaining() {
    let now = Utc::now();
    let session = Session::new(now);
    let status = session.status("s1", now, IDLE_TIMEOUT);
    assert!(!status.is_expired);
    assert_eq!(status.time_since_activity, 0);
    assert_eq!(status.time_remaining, 120_000);
    assert!(status.question_tracker.asked_questions.is_empty());
  }

  #[test]
  fn idle_past_timeout_is_expired_with_zero_remaining() {
    let created = Utc::now();
    let session = Session::new(created);
    let later = created + TimeDelta::milliseconds(130_000);
    let status = session.status("s1", later, IDLE_TIMEOUT);
    assert!(status.is_expired);
    assert_eq!(status.time_since_activity, 130_000);
    assert_eq!(status.time_remaining, 0);
  }

  #[test]
  fn exactly_at_timeout_is_not_yet_expired() {
    let created = Utc::now();
    let session = Session::new(created);
    let boundary = created + TimeDelta::milliseconds(120_000);
    assert!(!session.is_expired(boundary, IDLE_TIMEOUT));
  }

  #[test]
  fn touch_resets_the_idle_clock() {
    let created = Utc::now();
    let mut session = Session::new(created);
    let later = created + TimeDelta::milliseconds(90_000);
    session.touch(later);
    assert_eq!(session.idle_ms(later), 0);
    assert!(!session.is_expired(later + TimeDelta::milliseconds(60_000), IDLE_TIMEOUT));
  }

  #[test]
  fn status_serializes_camel_case() {
    let now = Utc::now();
    let status = Session::new(now).status("s1", now, IDLE_TIMEOUT);
    let value = serde_json::to_value(&status).unwrap();
    assert!(value.get("isExpired").is_some());
    assert!(value.get("timeSinceActivity").is_some());
    assert!(value["questionTracker"].get("askedQuestions").is_some());
  }
}
