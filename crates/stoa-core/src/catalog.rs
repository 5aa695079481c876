//! The trigger-question catalog — immutable reference data.
//!
//! Six categories in a fixed traversal order, each with a handful of
//! questions. A question carries curated "yes" and "no" indicator phrase
//! lists that the evaluator matches against free-text replies. Nothing in
//! this module has behaviour beyond lookup.

use serde::{Deserialize, Serialize};

// ─── Category keys ───────────────────────────────────────────────────────────

/// The six trigger categories. The declared order here is incidental; the
/// traversal order used by the sequencer is [`CATEGORY_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
  Celebratory,
  Environmental,
  Social,
  Emotional,
  Cognitive,
  Physiological,
}

impl CategoryKey {
  /// The lowercase wire/lookup form, matching the serde rename above.
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Celebratory => "celebratory",
      Self::Environmental => "environmental",
      Self::Social => "social",
      Self::Emotional => "emotional",
      Self::Cognitive => "cognitive",
      Self::Physiological => "physiological",
    }
  }

  /// The catalog entry for this category.
  pub fn category(self) -> &'static TriggerCategory {
    &CATEGORIES[self as usize]
  }
}

impl std::fmt::Display for CategoryKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The order categories are walked when delivering questions. Constant; no
/// randomization and no outcome-dependent reordering.
pub const CATEGORY_ORDER: [CategoryKey; 6] = [
  CategoryKey::Celebratory,
  CategoryKey::Environmental,
  CategoryKey::Social,
  CategoryKey::Emotional,
  CategoryKey::Cognitive,
  CategoryKey::Physiological,
];

// ─── Catalog types ───────────────────────────────────────────────────────────

/// One assessment question with its indicator phrase lists.
#[derive(Debug)]
pub struct TriggerQuestion {
  pub id:             &'static str,
  pub prompt:         &'static str,
  /// Phrases whose presence suggests the trigger applies.
  pub yes_indicators: &'static [&'static str],
  /// Phrases whose presence suggests it does not.
  pub no_indicators:  &'static [&'static str],
}

/// A named category and its questions, in delivery order.
#[derive(Debug)]
pub struct TriggerCategory {
  pub key:       CategoryKey,
  pub name:      &'static str,
  pub questions: &'static [TriggerQuestion],
}

// ─── Lookup ──────────────────────────────────────────────────────────────────

/// Find a question by id, together with its owning category.
pub fn question(
  id: &str,
) -> Option<(&'static TriggerCategory, &'static TriggerQuestion)> {
  CATEGORIES.iter().find_map(|category| {
    category
      .questions
      .iter()
      .find(|q| q.id == id)
      .map(|q| (category, q))
  })
}

/// Total number of questions across all categories.
pub fn total_questions() -> usize {
  CATEGORIES.iter().map(|c| c.questions.len()).sum()
}

// ─── Data ────────────────────────────────────────────────────────────────────

/// The full catalog, indexed by `CategoryKey as usize`.
pub static CATEGORIES: [TriggerCategory; 6] = [
  TriggerCategory {
    key:       CategoryKey::Celebratory,
    name:      "Celebratory/Positive",
    questions: &[
      TriggerQuestion {
        id:             "cel_01",
        prompt:         "Do you ever feel like you want to relapse when you feel successful after accomplishing something?",
        yes_indicators: &[
          "want to relapse",
          "feel successful",
          "accomplishing something",
          "celebration",
          "reward myself",
          "treat myself",
          "deserve it",
          "earned it",
        ],
        no_indicators:  &[
          "don't want to relapse",
          "stay clean",
          "healthy celebration",
          "no urge",
          "proud without substances",
          "natural satisfaction",
        ],
      },
      TriggerQuestion {
        id:             "cel_02",
        prompt:         "Do you ever feel like you want to relapse when you feel invincible/too powerful after accomplishing something?",
        yes_indicators: &[
          "feel invincible",
          "too powerful",
          "nerfing oneself",
          "bring myself down",
          "humble myself",
          "level myself",
          "ground myself",
        ],
        no_indicators:  &[
          "stay grounded",
          "healthy confidence",
          "balanced feelings",
          "no need to sabotage",
          "accept success",
        ],
      },
      TriggerQuestion {
        id:             "cel_03",
        prompt:         "Do you ever feel like you want to relapse to make already positive emotions even better?",
        yes_indicators: &[
          "make positive emotions better",
          "enhance good feelings",
          "amplify happiness",
          "boost positive mood",
          "intensify joy",
          "make it even better",
        ],
        no_indicators:  &[
          "content with natural emotions",
          "don't need enhancement",
          "happy as is",
          "natural joy is enough",
          "no need to amplify",
        ],
      },
    ],
  },
  TriggerCategory {
    key:       CategoryKey::Environmental,
    name:      "Environmental (Sensory Inputs)",
    questions: &[
      TriggerQuestion {
        id:             "env_01",
        prompt:         "Do you feel more likely to relapse when you return to a location where you used to habitually do your addicted activity?",
        yes_indicators: &[
          "return to location",
          "used to habitually",
          "addicted activity",
          "old using spot",
          "familiar place",
          "previous location",
          "habitual place",
        ],
        no_indicators:  &[
          "no location triggers",
          "anywhere is safe",
          "don't associate places",
          "neutral to locations",
          "no place triggers",
        ],
      },
      TriggerQuestion {
        id:             "env_02",
        prompt:         "Do you feel more likely to relapse when you see the addicted substance/media/other?",
        yes_indicators: &[
          "see addicted substance",
          "see media",
          "visual triggers",
          "see the substance",
          "see the media",
          "visual cues",
          "see the object",
        ],
        no_indicators:  &[
          "no visual triggers",
          "doesn't affect me",
          "neutral to seeing",
          "no reaction",
          "indifferent to visuals",
        ],
      },
      TriggerQuestion {
        id:             "env_03",
        prompt:         "Do you feel more likely to relapse when you see things that remind you of your addiction, for example a lighter, bottle opener, McDonalds logo?",
        yes_indicators: &[
          "remind you of addiction",
          "addiction paraphernalia",
          "lighter",
          "bottle opener",
          "McDonalds logo",
          "triggers memories",
          "reminds me of using",
        ],
        no_indicators:  &[
          "no reminders trigger",
          "neutral to objects",
          "don't associate",
          "no memory triggers",
          "objects don't affect me",
        ],
      },
      TriggerQuestion {
        id:             "env_04",
        prompt:         "Do you feel more likely to relapse during certain times of day?",
        yes_indicators: &[
          "certain times of day",
          "position of sun",
          "time triggers",
          "specific hours",
          "time of day",
          "daily patterns",
          "time-based triggers",
        ],
        no_indicators:  &[
          "no time triggers",
          "any time is same",
          "no daily patterns",
          "time doesn't matter",
          "no time associations",
        ],
      },
    ],
  },
  TriggerCategory {
    key:       CategoryKey::Social,
    name:      "Social",
    questions: &[
      TriggerQuestion {
        id:             "soc_01",
        prompt:         "Do you feel more likely to relapse when the opportunity is given by a friend/family member?",
        yes_indicators: &[
          "opportunity given",
          "friend family member",
          "offered by someone",
          "given by friend",
          "family offers",
          "social opportunity",
          "someone provides",
        ],
        no_indicators:  &[
          "no social pressure",
          "decline offers",
          "say no to friends",
          "family doesn't influence",
          "independent choice",
        ],
      },
      TriggerQuestion {
        id:             "soc_02",
        prompt:         "Do you ever feel like the main reason you relapse is due to peer pressure?",
        yes_indicators: &[
          "main reason",
          "due to peer pressure",
          "peer pressure",
          "social pressure",
          "group influence",
          "peer influence",
          "social pressure",
        ],
        no_indicators:  &[
          "not peer pressure",
          "my own choice",
          "independent decision",
          "not social influence",
          "personal reasons",
        ],
      },
      TriggerQuestion {
        id:             "soc_03",
        prompt:         "Do you ever feel the need to relapse to escape from a toxic relationship?",
        yes_indicators: &[
          "escape toxic relationship",
          "toxic relationship",
          "escape from relationship",
          "avoid toxic person",
          "escape toxicity",
          "run from relationship",
        ],
        no_indicators:  &[
          "healthy relationships",
          "no toxic people",
          "don't need escape",
          "good relationships",
          "no escape needed",
        ],
      },
      TriggerQuestion {
        id:             "soc_04",
        prompt:         "Do you ever feel the need to relapse because a relationship is dependent on your addiction?",
        yes_indicators: &[
          "relationship dependent",
          "dependent on addiction",
          "relationship needs addiction",
          "addiction maintains relationship",
          "relationship requires using",
          "dependent relationship",
        ],
        no_indicators:  &[
          "healthy relationships",
          "not dependent on addiction",
          "relationships don't require using",
          "independent relationships",
          "no dependency",
        ],
      },
    ],
  },
  TriggerCategory {
    key:       CategoryKey::Emotional,
    name:      "Emotional (GLASSAB)",
    questions: &[
      TriggerQuestion {
        id:             "emo_01",
        prompt:         "Do you feel more likely to relapse when you feel guilt/shame?",
        yes_indicators: &[
          "feel guilt",
          "feel shame",
          "guilty feelings",
          "shameful feelings",
          "guilt triggers",
          "shame triggers",
          "guilty shame",
        ],
        no_indicators:  &[
          "no guilt",
          "no shame",
          "healthy emotions",
          "process guilt healthily",
          "no guilt triggers",
        ],
      },
      TriggerQuestion {
        id:             "emo_02",
        prompt:         "Do you feel more likely to relapse when you feel lonely?",
        yes_indicators: &[
          "feel lonely",
          "loneliness",
          "lonely feelings",
          "alone",
          "isolated",
          "loneliness triggers",
          "feeling alone",
        ],
        no_indicators:  &[
          "not lonely",
          "connected",
          "have support",
          "not alone",
          "healthy connections",
        ],
      },
      TriggerQuestion {
        id:             "emo_03",
        prompt:         "Do you feel more likely to relapse when you feel angry?",
        yes_indicators: &[
          "feel angry",
          "anger",
          "angry feelings",
          "mad",
          "furious",
          "anger triggers",
          "feeling mad",
        ],
        no_indicators:  &[
          "not angry",
          "calm",
          "peaceful",
          "manage anger",
          "healthy anger",
        ],
      },
      TriggerQuestion {
        id:             "emo_04",
        prompt:         "Do you feel more likely to relapse when you feel sad?",
        yes_indicators: &[
          "feel sad",
          "sadness",
          "sad feelings",
          "depressed",
          "down",
          "sadness triggers",
          "feeling down",
        ],
        no_indicators:  &[
          "not sad",
          "happy",
          "content",
          "manage sadness",
          "healthy sadness",
        ],
      },
      TriggerQuestion {
        id:             "emo_05",
        prompt:         "Do you feel more likely to relapse when you feel stressed?",
        yes_indicators: &[
          "feel stressed",
          "stress",
          "stressed feelings",
          "overwhelmed",
          "pressure",
          "stress triggers",
          "feeling overwhelmed",
        ],
        no_indicators:  &[
          "not stressed",
          "relaxed",
          "calm",
          "manage stress",
          "healthy stress",
        ],
      },
      TriggerQuestion {
        id:             "emo_06",
        prompt:         "Do you feel more likely to relapse when you feel anxious?",
        yes_indicators: &[
          "feel anxious",
          "anxiety",
          "anxious feelings",
          "worried",
          "nervous",
          "anxiety triggers",
          "feeling worried",
        ],
        no_indicators:  &[
          "not anxious",
          "calm",
          "relaxed",
          "manage anxiety",
          "healthy anxiety",
        ],
      },
    ],
  },
  TriggerCategory {
    key:       CategoryKey::Cognitive,
    name:      "Cognitive",
    questions: &[
      TriggerQuestion {
        id:             "cog_01",
        prompt:         "Do you ever feel like: 'just once won't hurt, right?'?",
        yes_indicators: &[
          "just once won't hurt",
          "downplaying consequences",
          "minimizing risk",
          "just once",
          "won't hurt",
          "downplay consequences",
          "minimize risk",
        ],
        no_indicators:  &[
          "know it will hurt",
          "understand consequences",
          "no downplaying",
          "realistic about risk",
          "aware of consequences",
        ],
      },
      TriggerQuestion {
        id:             "cog_02",
        prompt:         "Do you ever feel like: 'Life sucks, fuck it'?",
        yes_indicators: &[
          "life sucks",
          "fuck it",
          "helplessness",
          "hopeless",
          "give up",
          "what's the point",
          "helpless thinking",
        ],
        no_indicators:  &[
          "life is good",
          "hopeful",
          "positive outlook",
          "see possibilities",
          "optimistic",
        ],
      },
      TriggerQuestion {
        id:             "cog_03",
        prompt:         "Do you ever feel like: 'I already messed up, might as well enjoy it until I get back on track'?",
        yes_indicators: &[
          "already messed up",
          "might as well enjoy",
          "black and white thinking",
          "all or nothing",
          "since I failed",
          "enjoy the failure",
          "black white thinking",
        ],
        no_indicators:  &[
          "learn from mistakes",
          "get back on track",
          "don't give up",
          "continue recovery",
          "no all or nothing",
        ],
      },
      TriggerQuestion {
        id:             "cog_04",
        prompt:         "Do you ever feel like: 'I can't handle it anymore, I feel defeated. I'm going to relapse'?",
        yes_indicators: &[
          "can't handle it",
          "feel defeated",
          "going to relapse",
          "manifestation",
          "self-fulfilling prophecy",
          "defeated thinking",
          "give up",
        ],
        no_indicators:  &[
          "can handle it",
          "stay strong",
          "don't give up",
          "keep fighting",
          "resilient",
        ],
      },
    ],
  },
  TriggerCategory {
    key:       CategoryKey::Physiological,
    name:      "Physiological (HALT)",
    questions: &[
      TriggerQuestion {
        id:             "phy_01",
        prompt:         "Do you feel you are more prone to relapse when you are hungry?",
        yes_indicators: &[
          "more prone when hungry",
          "hungry triggers",
          "hunger",
          "hungry state",
          "need food",
          "hungry relapse",
          "hunger triggers",
        ],
        no_indicators:  &[
          "not affected by hunger",
          "manage hunger",
          "eat regularly",
          "hunger doesn't trigger",
          "healthy eating",
        ],
      },
      TriggerQuestion {
        id:             "phy_02",
        prompt:         "Do you feel you are more prone to relapse when you are angry?",
        yes_indicators: &[
          "more prone when angry",
          "angry triggers",
          "anger",
          "angry state",
          "mad",
          "angry relapse",
          "anger triggers",
        ],
        no_indicators:  &[
          "not affected by anger",
          "manage anger",
          "calm down",
          "anger doesn't trigger",
          "healthy anger management",
        ],
      },
      TriggerQuestion {
        id:             "phy_03",
        prompt:         "Do you feel you are more prone to relapse when you are lonely?",
        yes_indicators: &[
          "more prone when lonely",
          "lonely triggers",
          "loneliness",
          "lonely state",
          "alone",
          "lonely relapse",
          "loneliness triggers",
        ],
        no_indicators:  &[
          "not affected by loneliness",
          "manage loneliness",
          "connect with others",
          "loneliness doesn't trigger",
          "healthy connections",
        ],
      },
      TriggerQuestion {
        id:             "phy_04",
        prompt:         "Do you feel you are more prone to relapse when you are physically tired?",
        yes_indicators: &[
          "more prone when physically tired",
          "physically tired triggers",
          "physical exhaustion",
          "tired body",
          "physically exhausted",
          "physical tired relapse",
          "body tired triggers",
        ],
        no_indicators:  &[
          "not affected by physical tiredness",
          "manage physical tiredness",
          "rest properly",
          "physical tiredness doesn't trigger",
          "healthy rest",
        ],
      },
      TriggerQuestion {
        id:             "phy_05",
        prompt:         "Do you feel you are more prone to relapse when you are mentally tired?",
        yes_indicators: &[
          "more prone when mentally tired",
          "mentally tired triggers",
          "mental exhaustion",
          "tired mind",
          "mentally exhausted",
          "mental tired relapse",
          "mind tired triggers",
        ],
        no_indicators:  &[
          "not affected by mental tiredness",
          "manage mental tiredness",
          "mental rest",
          "mental tiredness doesn't trigger",
          "healthy mental rest",
        ],
      },
    ],
  },
];

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn category_order_covers_every_category_once() {
    for (index, key) in CATEGORY_ORDER.iter().enumerate() {
      assert_eq!(*key as usize, index);
      assert_eq!(key.category().key, *key);
    }
  }

  #[test]
  fn twenty_five_questions_with_unique_ids() {
    assert_eq!(total_questions(), 25);
    let mut ids: Vec<&str> = CATEGORIES
      .iter()
      .flat_map(|c| c.questions.iter().map(|q| q.id))
      .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 25);
  }

  #[test]
  fn every_question_carries_both_indicator_lists() {
    for category in &CATEGORIES {
      for question in category.questions {
        assert!(!question.yes_indicators.is_empty(), "{}", question.id);
        assert!(!question.no_indicators.is_empty(), "{}", question.id);
      }
    }
  }

  #[test]
  fn question_lookup_finds_owning_category() {
    let (category, question) = question("emo_03").unwrap();
    assert_eq!(category.key, CategoryKey::Emotional);
    assert!(question.prompt.contains("angry"));
    assert!(super::question("xyz_99").is_none());
  }

  #[test]
  fn category_key_serde_roundtrip() {
    let json = serde_json::to_string(&CategoryKey::Celebratory).unwrap();
    assert_eq!(json, "\"celebratory\"");
    let back: CategoryKey = serde_json::from_str(&json).unwrap();
    assert_eq!(back, CategoryKey::Celebratory);
  }
}
