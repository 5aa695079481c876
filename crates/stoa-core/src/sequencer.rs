//! Question delivery — walks the catalog in fixed category order, once.
//!
//! A [`QuestionTracker`] remembers which questions a session has been asked
//! and which it has answered. Delivery is independent of evaluation results:
//! no re-asking, no skipping, no randomization.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CATEGORY_ORDER, CategoryKey, TriggerCategory, TriggerQuestion};

// ─── Delivered question ──────────────────────────────────────────────────────

/// The wire shape of a delivered question.
///
/// Serialized to the client on delivery and posted back verbatim with the
/// user's reply, so it must round-trip through JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskedQuestion {
  pub id:             String,
  pub question:       String,
  pub category:       CategoryKey,
  pub category_name:  String,
  pub yes_indicators: Vec<String>,
  pub no_indicators:  Vec<String>,
}

impl AskedQuestion {
  /// Materialise the wire shape from catalog reference data.
  pub fn from_catalog(
    category: &TriggerCategory,
    question: &TriggerQuestion,
  ) -> Self {
    Self {
      id:             question.id.to_string(),
      question:       question.prompt.to_string(),
      category:       category.key,
      category_name:  category.name.to_string(),
      yes_indicators: question.yes_indicators.iter().map(|s| s.to_string()).collect(),
      no_indicators:  question.no_indicators.iter().map(|s| s.to_string()).collect(),
    }
  }
}

// ─── Tracker ─────────────────────────────────────────────────────────────────

/// Per-session record of delivery progress.
///
/// Invariant: `answered` is a subset of `asked`. [`record_answer`] refuses
/// ids that were never delivered.
///
/// [`record_answer`]: QuestionTracker::record_answer
#[derive(Debug, Clone, Default)]
pub struct QuestionTracker {
  asked:            BTreeSet<String>,
  answered:         BTreeSet<String>,
  current_category: Option<CategoryKey>,
}

impl QuestionTracker {
  /// Deliver the next unasked question, marking it asked and updating the
  /// current category. Returns `None` once every question in every category
  /// has been asked.
  pub fn next_question(&mut self) -> Option<AskedQuestion> {
    for key in CATEGORY_ORDER {
      let category = key.category();
      for question in category.questions {
        if !self.asked.contains(question.id) {
          self.current_category = Some(key);
          self.asked.insert(question.id.to_string());
          return Some(AskedQuestion::from_catalog(category, question));
        }
      }
    }
    None
  }

  /// Mark a previously asked question as answered. Returns `false` (and
  /// records nothing) when the id was never asked or is unknown.
  pub fn record_answer(&mut self, question_id: &str) -> bool {
    if !self.asked.contains(question_id) {
      return false;
    }
    self.answered.insert(question_id.to_string());
    true
  }

  /// `true` once the whole catalog has been delivered.
  pub fn is_exhausted(&self) -> bool {
    self.asked.len() == catalog::total_questions()
  }

  pub fn asked_count(&self) -> usize {
    self.asked.len()
  }

  /// An owned snapshot of the tracker sets. Callers can never mutate the
  /// live sets through it.
  pub fn snapshot(&self) -> TrackerSnapshot {
    TrackerSnapshot {
      asked_questions:    self.asked.iter().cloned().collect(),
      answered_questions: self.answered.iter().cloned().collect(),
      current_category:   self.current_category,
    }
  }
}

/// Read-only copy of a tracker, in wire shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSnapshot {
  pub asked_questions:    Vec<String>,
  pub answered_questions: Vec<String>,
  pub current_category:   Option<CategoryKey>,
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_delivery_is_first_celebratory_question() {
    let mut tracker = QuestionTracker::default();
    let q = tracker.next_question().unwrap();
    assert_eq!(q.id, "cel_01");
    assert_eq!(q.category, CategoryKey::Celebratory);
    assert_eq!(q.category_name, "Celebratory/Positive");
    assert_eq!(tracker.snapshot().current_category, Some(CategoryKey::Celebratory));
  }

  #[test]
  fn categories_exhaust_in_fixed_order_without_repeats() {
    let mut tracker = QuestionTracker::default();
    let mut seen = Vec::new();
    let mut last_order = 0;
    while let Some(q) = tracker.next_question() {
      assert!(!seen.contains(&q.id), "repeated {}", q.id);
      let order = q.category as usize;
      assert!(order >= last_order, "category went backwards at {}", q.id);
      last_order = order;
      seen.push(q.id);
    }
    assert_eq!(seen.len(), 25);
    assert!(tracker.is_exhausted());
    assert!(tracker.next_question().is_none());
  }

  #[test]
  fn delivery_moves_on_only_after_category_is_done() {
    let mut tracker = QuestionTracker::default();
    for expected in ["cel_01", "cel_02", "cel_03", "env_01"] {
      assert_eq!(tracker.next_question().unwrap().id, expected);
    }
  }

  #[test]
  fn record_answer_requires_prior_delivery() {
    let mut tracker = QuestionTracker::default();
    assert!(!tracker.record_answer("cel_01"));
    assert!(tracker.snapshot().answered_questions.is_empty());

    tracker.next_question();
    assert!(tracker.record_answer("cel_01"));
    assert_eq!(tracker.snapshot().answered_questions, vec!["cel_01"]);
  }

  #[test]
  fn snapshot_is_detached_from_live_tracker() {
    let mut tracker = QuestionTracker::default();
    tracker.next_question();
    let mut snapshot = tracker.snapshot();
    snapshot.asked_questions.clear();
    assert_eq!(tracker.asked_count(), 1);
  }

  #[test]
  fn asked_question_serializes_camel_case() {
    let mut tracker = QuestionTracker::default();
    let q = tracker.next_question().unwrap();
    let value = serde_json::to_value(&q).unwrap();
    assert!(value.get("categoryName").is_some());
    assert!(value.get("yesIndicators").is_some());
    let back: AskedQuestion = serde_json::from_value(value).unwrap();
    assert_eq!(back.id, q.id);
  }
}
