//! The response evaluator — keyword spotting against indicator lists.
//!
//! Matching is deliberately loose: case-folded substring containment with no
//! tokenization or stemming, so indicator phrases inside longer words count.
//! The verdict follows a five-case decision table over the yes/no match
//! counts; ties (both sides matched) and silence (neither matched) are
//! indeterminate.

use serde::{Deserialize, Serialize};

use crate::{
  catalog::{self, CategoryKey},
  sequencer::AskedQuestion,
};

// ─── Result types ────────────────────────────────────────────────────────────

/// How strongly the matched indicators support the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
  High,
  Medium,
  Low,
}

/// The outcome of evaluating one reply against one question.
///
/// `triggered` is ternary: `Some(true)` / `Some(false)` for a determinate
/// verdict, `None` when the signals are mixed or absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
  pub triggered:     Option<bool>,
  pub category:      CategoryKey,
  pub category_name: String,
  pub question_id:   String,
  pub question:      String,
  pub confidence:    Confidence,
  pub reasoning:     String,
  pub yes_matches:   Vec<String>,
  pub no_matches:    Vec<String>,
}

// ─── Evaluation ──────────────────────────────────────────────────────────────

/// Evaluate a free-text reply against a question's indicator lists.
///
/// Decision table, in order:
/// 1. two or more yes matches, no no matches → triggered, high confidence
/// 2. one yes match, no no matches → triggered, medium confidence
/// 3. no matches only → not triggered, high confidence
/// 4. matches on both sides → indeterminate, low confidence
/// 5. no matches at all → indeterminate, low confidence
pub fn evaluate(response: &str, question: &AskedQuestion) -> Evaluation {
  let response = response.to_lowercase();

  let yes_matches = matching_phrases(&response, &question.yes_indicators);
  let no_matches = matching_phrases(&response, &question.no_indicators);

  let (triggered, confidence, reasoning) =
    match (yes_matches.len(), no_matches.len()) {
      (y, 0) if y >= 2 => (
        Some(true),
        Confidence::High,
        format!("Multiple trigger indicators found: {}", yes_matches.join(", ")),
      ),
      (y, 0) if y >= 1 => (
        Some(true),
        Confidence::Medium,
        format!("Trigger indicator found: {}", yes_matches.join(", ")),
      ),
      (0, n) if n >= 1 => (
        Some(false),
        Confidence::High,
        "No trigger indicators found".to_string(),
      ),
      (y, n) if y > 0 && n > 0 => (
        None,
        Confidence::Low,
        "Mixed indicators - unclear response".to_string(),
      ),
      _ => (
        None,
        Confidence::Low,
        "No clear indicators found".to_string(),
      ),
    };

  Evaluation {
    triggered,
    category: question.category,
    category_name: question.category_name.clone(),
    question_id: question.id.clone(),
    question: question.question.clone(),
    confidence,
    reasoning,
    yes_matches,
    no_matches,
  }
}

fn matching_phrases(response: &str, indicators: &[String]) -> Vec<String> {
  indicators
    .iter()
    .filter(|phrase| response.contains(&phrase.to_lowercase()))
    .cloned()
    .collect()
}

// ─── Filler suppression ──────────────────────────────────────────────────────

/// Filler acknowledgements that should never count as trigger evidence.
const BASIC_RESPONSES: &[&str] = &[
  "good", "fine", "ok", "okay", "great", "awesome", "excellent",
  "bad", "terrible", "awful", "horrible",
  "yes", "no", "maybe", "sure", "alright",
  "i am good", "i am fine", "i am ok", "i am okay",
  "feeling good", "feeling fine", "feeling ok",
  "doing good", "doing fine", "doing ok",
  "i feel good", "i feel fine", "i feel ok",
];

/// Whether a (lowercased) message is a short filler acknowledgement.
pub fn is_basic_response(message: &str) -> bool {
  let message = message.to_lowercase();
  message.len() < 50
    && BASIC_RESPONSES.iter().any(|basic| message.contains(basic))
}

/// Like [`evaluate`], but skips the indicator scan entirely for very short
/// or filler replies, returning a fixed low-confidence non-trigger. Keeps
/// throwaway acknowledgements from producing false positives.
pub fn analyze(message: &str, question: &AskedQuestion) -> Evaluation {
  if message.len() < 10 || is_basic_response(message) {
    return Evaluation {
      triggered:     Some(false),
      category:      question.category,
      category_name: question.category_name.clone(),
      question_id:   question.id.clone(),
      question:      question.question.clone(),
      confidence:    Confidence::Low,
      reasoning:     "Basic response".to_string(),
      yes_matches:   Vec::new(),
      no_matches:    Vec::new(),
    };
  }
  evaluate(message, question)
}

// ─── Whole-message scan ──────────────────────────────────────────────────────

/// Scan one free-text message against every question in the catalog and
/// return the triggered results with medium or high confidence, capped at
/// two so a single message never reads as everything at once.
pub fn detect_in_message(message: &str) -> Vec<Evaluation> {
  let mut hits = Vec::new();
  if message.len() < 10 || is_basic_response(message) {
    return hits;
  }

  for category in &catalog::CATEGORIES {
    for question in category.questions {
      let wire = AskedQuestion::from_catalog(category, question);
      let evaluation = analyze(message, &wire);
      if evaluation.triggered == Some(true)
        && evaluation.confidence != Confidence::Low
      {
        hits.push(evaluation);
        if hits.len() == 2 {
          return hits;
        }
      }
    }
  }
  hits
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sequencer::QuestionTracker;

  fn first_question() -> AskedQuestion {
    QuestionTracker::default().next_question().unwrap()
  }

  // ── Decision table ─────────────────────────────────────────────────────────

  #[test]
  fn two_yes_and_zero_no_is_triggered_high() {
    let q = first_question();
    let e = evaluate(
      "Honestly when I feel successful I want to reward myself right away",
      &q,
    );
    assert_eq!(e.triggered, Some(true));
    assert_eq!(e.confidence, Confidence::High);
    assert_eq!(e.yes_matches, vec!["feel successful", "reward myself"]);
    assert!(e.reasoning.starts_with("Multiple trigger indicators found"));
  }

  #[test]
  fn one_yes_and_zero_no_is_triggered_medium() {
    let q = first_question();
    let e = evaluate("sometimes i think i deserve it after a long week", &q);
    assert_eq!(e.triggered, Some(true));
    assert_eq!(e.confidence, Confidence::Medium);
    assert_eq!(e.yes_matches, vec!["deserve it"]);
  }

  #[test]
  fn no_indicators_only_is_not_triggered_high() {
    let q = first_question();
    let e = evaluate("No urge at all, I'd rather stay clean and enjoy it", &q);
    assert_eq!(e.triggered, Some(false));
    assert_eq!(e.confidence, Confidence::High);
    assert_eq!(e.reasoning, "No trigger indicators found");
    assert!(e.yes_matches.is_empty());
    assert_eq!(e.no_matches.len(), 2);
  }

  #[test]
  fn mixed_signals_are_indeterminate() {
    let q = first_question();
    let e = evaluate(
      "I want to reward myself but mostly I just stay clean these days",
      &q,
    );
    assert_eq!(e.triggered, None);
    assert_eq!(e.confidence, Confidence::Low);
    assert_eq!(e.reasoning, "Mixed indicators - unclear response");
  }

  #[test]
  fn silence_is_indeterminate() {
    let q = first_question();
    let e = evaluate("we talked about the weather for most of the evening", &q);
    assert_eq!(e.triggered, None);
    assert_eq!(e.confidence, Confidence::Low);
    assert_eq!(e.reasoning, "No clear indicators found");
  }

  #[test]
  fn matching_is_case_insensitive_substring_containment() {
    let q = first_question();
    // "DESERVE IT" folded, and matched inside a longer run of text.
    let e = evaluate("I DESERVE IT, don't I?", &q);
    assert_eq!(e.triggered, Some(true));
    assert_eq!(e.yes_matches, vec!["deserve it"]);
  }

  // ── Filler suppression ─────────────────────────────────────────────────────

  #[test]
  fn basic_acknowledgements_never_trigger() {
    let q = first_question();
    for filler in ["fine", "ok", "i am good", "feeling fine today"] {
      let e = analyze(filler, &q);
      assert_eq!(e.triggered, Some(false), "{filler:?}");
      assert_eq!(e.confidence, Confidence::Low);
      assert_eq!(e.reasoning, "Basic response");
      assert!(e.yes_matches.is_empty());
    }
  }

  #[test]
  fn basic_phrase_in_a_long_message_is_not_suppressed() {
    // Over the 50-char cap the filler list no longer applies.
    let long = "I guess I'm fine but honestly I want to reward myself and I feel successful";
    assert!(!is_basic_response(long));
    let e = analyze(long, &first_question());
    assert_eq!(e.triggered, Some(true));
  }

  #[test]
  fn very_short_replies_are_suppressed_even_without_filler() {
    let e = analyze("hm, dunno", &first_question());
    assert_eq!(e.triggered, Some(false));
    assert_eq!(e.reasoning, "Basic response");
  }

  // ── Whole-message scan ─────────────────────────────────────────────────────

  #[test]
  fn detect_in_message_caps_at_two_confident_hits() {
    let message = "Lately I feel lonely and isolated, I feel stressed and \
                   overwhelmed, and when I feel angry I get furious about it";
    let hits = detect_in_message(message);
    assert_eq!(hits.len(), 2);
    for hit in &hits {
      assert_eq!(hit.triggered, Some(true));
      assert_ne!(hit.confidence, Confidence::Low);
    }
  }

  #[test]
  fn detect_in_message_skips_filler() {
    assert!(detect_in_message("i am good").is_empty());
    assert!(detect_in_message("ok").is_empty());
  }
}
