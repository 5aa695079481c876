//! Assessment aggregation — per-category summaries and coping strategies.

use serde::Serialize;

use crate::{
  catalog::{CATEGORY_ORDER, CategoryKey},
  evaluate::{Confidence, Evaluation},
};

// ─── Summary ─────────────────────────────────────────────────────────────────

/// Coarse risk tier derived from how many assessments landed in a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

impl RiskLevel {
  fn from_count(count: usize) -> Self {
    match count {
      0..=1 => Self::Low,
      2 => Self::Medium,
      _ => Self::High,
    }
  }
}

/// Aggregate of the assessments that fell into one category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
  pub category:   CategoryKey,
  pub name:       String,
  pub count:      usize,
  pub confidence: Vec<Confidence>,
  pub risk_level: RiskLevel,
}

/// Group assessments by category, in catalog traversal order. Categories
/// with no assessments are omitted.
pub fn summarize(assessments: &[Evaluation]) -> Vec<CategorySummary> {
  CATEGORY_ORDER
    .iter()
    .filter_map(|&key| {
      let confidence: Vec<Confidence> = assessments
        .iter()
        .filter(|a| a.category == key)
        .map(|a| a.confidence)
        .collect();
      if confidence.is_empty() {
        return None;
      }
      Some(CategorySummary {
        category: key,
        name: key.category().name.to_string(),
        count: confidence.len(),
        risk_level: RiskLevel::from_count(confidence.len()),
        confidence,
      })
    })
    .collect()
}

// ─── Coping strategies ───────────────────────────────────────────────────────

/// Curated strategies for managing triggers in a category.
pub fn coping_strategies(category: CategoryKey) -> &'static [&'static str] {
  match category {
    CategoryKey::Celebratory => &[
      "Try celebrating with healthy activities like exercise, meditation, or spending time with loved ones",
      "Create a list of non-substance rewards you can give yourself for achievements",
      "Practice gratitude and acknowledge your success without needing external substances",
    ],
    CategoryKey::Environmental => &[
      "Avoid places where you used to use substances",
      "Create new, positive associations with triggering locations",
      "Have an exit plan when you encounter triggering environments",
    ],
    CategoryKey::Social => &[
      "Surround yourself with supportive, sober friends",
      "Practice saying 'no' to peer pressure",
      "Have a trusted person you can call when feeling pressured",
    ],
    CategoryKey::Emotional => &[
      "Practice deep breathing and mindfulness techniques",
      "Talk to a therapist or support group about your emotions",
      "Use healthy coping mechanisms like exercise, journaling, or creative activities",
    ],
    CategoryKey::Cognitive => &[
      "Challenge negative thoughts with positive affirmations",
      "Focus on the present moment rather than dwelling on the past",
      "Practice cognitive behavioral therapy techniques",
    ],
    CategoryKey::Physiological => &[
      "Address HALT states: eat when hungry, rest when tired, connect when lonely, process anger healthily",
      "Maintain a regular sleep schedule and healthy eating habits",
      "Practice stress-reduction techniques like yoga or meditation",
    ],
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::evaluate::{analyze, detect_in_message};
  use crate::sequencer::AskedQuestion;

  fn wire(category: CategoryKey, index: usize) -> AskedQuestion {
    let cat = category.category();
    AskedQuestion::from_catalog(cat, &cat.questions[index])
  }

  #[test]
  fn summarize_groups_by_category_in_traversal_order() {
    let assessments = vec![
      analyze("when I feel angry I get furious about everything", &wire(CategoryKey::Emotional, 2)),
      analyze("I definitely want to reward myself, I feel successful", &wire(CategoryKey::Celebratory, 0)),
      analyze("I feel stressed and overwhelmed most evenings", &wire(CategoryKey::Emotional, 4)),
    ];
    let summary = summarize(&assessments);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].category, CategoryKey::Celebratory);
    assert_eq!(summary[1].category, CategoryKey::Emotional);
    assert_eq!(summary[1].count, 2);
  }

  #[test]
  fn risk_level_tiers_at_one_two_three() {
    assert_eq!(RiskLevel::from_count(1), RiskLevel::Low);
    assert_eq!(RiskLevel::from_count(2), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_count(3), RiskLevel::High);
    assert_eq!(RiskLevel::from_count(6), RiskLevel::High);
  }

  #[test]
  fn summary_composes_with_whole_message_detection() {
    let hits = detect_in_message(
      "I feel lonely and isolated, and I feel stressed and overwhelmed lately",
    );
    let summary = summarize(&hits);
    assert!(!summary.is_empty());
    assert!(summary.iter().all(|s| s.category == CategoryKey::Emotional));
  }

  #[test]
  fn every_category_has_strategies() {
    for key in CATEGORY_ORDER {
      assert!(!coping_strategies(key).is_empty());
    }
  }
}
