//! Linguistic feature counting

use crate::nlp::{NlpError, PosTagger, TaggedToken, Tokenizer};
use serde::{Deserialize, Serialize};

const PRONOUN_TAGS: &[&str] = &["PRP", "PRP$", "WP", "WP$"];
const PERSONAL_PRONOUN_TAGS: &[&str] = &["PRP"];
const ARTICLE_TAGS: &[&str] = &["DT"];
const PAST_TENSE_TAGS: &[&str] = &["VBD", "VBN"];
const FUTURE_MODAL_TAGS: &[&str] = &["MD"];
const PREPOSITION_TAGS: &[&str] = &["IN"];

/// Negation forms, matched exactly against word tokens
const NEGATIONS: &[&str] = &["no", "not", "never", "n't"];

/// Raw linguistic counts for one piece of text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub num_words: usize,
    pub words_per_sentence: f64,
    pub num_pronouns: usize,
    pub num_personal_pronouns: usize,
    pub num_articles: usize,
    pub num_past_tense: usize,
    pub num_future_modal: usize,
    pub num_prepositions: usize,
    pub num_negations: usize,
}

fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

fn count_tags(tagged: &[TaggedToken], tags: &[&str]) -> usize {
    tagged
        .iter()
        .filter(|(_, tag)| tags.contains(&tag.as_str()))
        .count()
}

/// Derives a [`FeatureVector`] from text using a tokenizer and a tagger
#[derive(Debug, Clone, Default)]
pub struct FeatureCounter<T, P> {
    tokenizer: T,
    tagger: P,
}

impl<T: Tokenizer, P: PosTagger> FeatureCounter<T, P> {
    pub fn new(tokenizer: T, tagger: P) -> Self {
        Self { tokenizer, tagger }
    }

    pub fn count(&self, text: &str) -> Result<FeatureVector, NlpError> {
        let tokens = self.tokenizer.words(text)?;
        let tagged = self.tagger.tag(&tokens)?;
        if tagged.len() != tokens.len() {
            return Err(NlpError::TagCountMismatch {
                tokens: tokens.len(),
                tagged: tagged.len(),
            });
        }

        Ok(FeatureVector {
            num_words: count_words(&tokens),
            words_per_sentence: self.words_per_sentence(text)?,
            num_pronouns: count_tags(&tagged, PRONOUN_TAGS),
            num_personal_pronouns: count_tags(&tagged, PERSONAL_PRONOUN_TAGS),
            num_articles: count_tags(&tagged, ARTICLE_TAGS),
            num_past_tense: count_tags(&tagged, PAST_TENSE_TAGS),
            num_future_modal: count_tags(&tagged, FUTURE_MODAL_TAGS),
            num_prepositions: count_tags(&tagged, PREPOSITION_TAGS),
            num_negations: count_negations(&tokens),
        })
    }

    /// Mean word count per sentence, `0.0` for text without sentences
    #[allow(clippy::cast_precision_loss)] // word counts stay far below 2^52
    pub fn words_per_sentence(&self, text: &str) -> Result<f64, NlpError> {
        let sentences = self.tokenizer.sentences(text)?;
        if sentences.is_empty() {
            return Ok(0.0);
        }

        let mut total_words = 0;
        for sentence in &sentences {
            total_words += count_words(&self.tokenizer.words(sentence)?);
        }
        Ok(total_words as f64 / sentences.len() as f64)
    }
}

/// Tokens that are not pure punctuation
pub fn count_words(tokens: &[String]) -> usize {
    tokens.iter().filter(|t| !is_punctuation(t)).count()
}

pub fn count_negations(tokens: &[String]) -> usize {
    tokens
        .iter()
        .filter(|t| NEGATIONS.contains(&t.as_str()))
        .count()
}
