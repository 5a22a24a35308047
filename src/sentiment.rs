//! Sentiment classification
//!
//! Embeds free text as the average of its word vectors and feeds it to a
//! pre-trained linear classifier.

mod classifier;
mod embedding;
mod error;

pub use classifier::LinearClassifier;
pub use embedding::WordEmbeddings;
pub use error::SentimentError;

use std::path::Path;

/// Interpretation of a classifier label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Negative,
    Positive,
    /// Any label other than 0 or 1, reported verbatim
    Unexpected(i64),
}

impl SentimentLabel {
    pub fn from_label(label: i64) -> Self {
        match label {
            0 => Self::Negative,
            1 => Self::Positive,
            other => Self::Unexpected(other),
        }
    }

    /// Line shown to the user
    pub fn message(self) -> String {
        match self {
            Self::Negative => "Hmm, it seems like you're feeling a bit down.".to_string(),
            Self::Positive => "It sounds like you're in a positive mood!".to_string(),
            Self::Unexpected(label) => {
                format!("Hmm, that's weird.  My classifier predicted a value of: {label}")
            }
        }
    }
}

/// Embeddings plus classifier: `predict(text) -> label`
#[derive(Debug, Clone)]
pub struct SentimentModel {
    embeddings: WordEmbeddings,
    classifier: LinearClassifier,
}

impl SentimentModel {
    pub fn new(
        embeddings: WordEmbeddings,
        classifier: LinearClassifier,
    ) -> Result<Self, SentimentError> {
        if embeddings.dimension() != classifier.dimension() {
            return Err(SentimentError::DimensionMismatch {
                expected: classifier.dimension(),
                actual: embeddings.dimension(),
            });
        }
        Ok(Self {
            embeddings,
            classifier,
        })
    }

    pub fn load(embeddings_path: &Path, model_path: &Path) -> Result<Self, SentimentError> {
        Self::new(
            WordEmbeddings::load(embeddings_path)?,
            LinearClassifier::load(model_path)?,
        )
    }

    pub fn predict(&self, text: &str) -> Result<i64, SentimentError> {
        let vector = self.embeddings.embed(text);
        self.classifier.predict(&vector)
    }
}
