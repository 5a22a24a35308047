//! Psychological correlate ranking
//!
//! The catalog is an ordered list: among frequency features with equal
//! counts, the one declared first wins. Ranking sorts indices into the
//! catalog with a stable sort so that order is never lost.

use super::FeatureVector;
use serde::{Deserialize, Serialize};

/// Upper bound on the number of correlates reported
pub const MAX_CORRELATES: usize = 3;

/// Word count above which talkativeness is reported
const WORD_COUNT_THRESHOLD: usize = 100;

/// Words per sentence above which cognitive complexity is reported
const WORDS_PER_SENTENCE_THRESHOLD: f64 = 20.0;

/// Linguistic features with a psychological interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    NumWords,
    WordsPerSentence,
    Pronouns,
    PersonalPronouns,
    Articles,
    PastTense,
    FutureModal,
    Prepositions,
    Negations,
}

/// Feature descriptions in declaration order
pub const CORRELATE_CATALOG: [(Feature, &str); 9] = [
    (Feature::NumWords, "Talkativeness, verbal fluency"),
    (Feature::WordsPerSentence, "Verbal fluency, cognitive complexity"),
    (Feature::Pronouns, "Informal, personal"),
    (Feature::PersonalPronouns, "Personal, social"),
    (Feature::Articles, "Use of concrete nouns, interest in objects/things"),
    (Feature::PastTense, "Focused on the past"),
    (Feature::FutureModal, "Future and goal-oriented"),
    (Feature::Prepositions, "Education, concern with precision"),
    (Feature::Negations, "Inhibition"),
];

/// Catalog entries ranked by frequency rather than by threshold
const FREQUENCY_START: usize = 2;

impl Feature {
    pub fn description(self) -> &'static str {
        CORRELATE_CATALOG
            .iter()
            .find(|(feature, _)| *feature == self)
            .map_or("", |(_, description)| description)
    }
}

impl FeatureVector {
    /// Count for a frequency feature. Threshold features have no count here.
    fn frequency(&self, feature: Feature) -> usize {
        match feature {
            Feature::Pronouns => self.num_pronouns,
            Feature::PersonalPronouns => self.num_personal_pronouns,
            Feature::Articles => self.num_articles,
            Feature::PastTense => self.num_past_tense,
            Feature::FutureModal => self.num_future_modal,
            Feature::Prepositions => self.num_prepositions,
            Feature::Negations => self.num_negations,
            Feature::NumWords | Feature::WordsPerSentence => 0,
        }
    }
}

/// Rank the most informative correlates for a feature vector
///
/// Threshold features come first (strictly above 100 words, strictly above
/// 20 words per sentence), then frequency features by descending count
/// until [`MAX_CORRELATES`] entries are collected. Zero counts still rank.
pub fn rank(features: &FeatureVector) -> Vec<&'static str> {
    let mut correlates = Vec::with_capacity(MAX_CORRELATES);

    if features.num_words > WORD_COUNT_THRESHOLD {
        correlates.push(Feature::NumWords.description());
    }
    if features.words_per_sentence > WORDS_PER_SENTENCE_THRESHOLD {
        correlates.push(Feature::WordsPerSentence.description());
    }

    let mut ranked: Vec<usize> = (FREQUENCY_START..CORRELATE_CATALOG.len()).collect();
    // sort_by_key is stable: equal counts keep catalog order
    ranked.sort_by_key(|&i| std::cmp::Reverse(features.frequency(CORRELATE_CATALOG[i].0)));

    for i in ranked {
        if correlates.len() == MAX_CORRELATES {
            break;
        }
        correlates.push(CORRELATE_CATALOG[i].1);
    }

    tracing::debug!(?correlates, "Ranked correlates");
    correlates
}
