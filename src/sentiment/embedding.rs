//! Pre-trained word vectors
//!
//! Reads the word2vec text format: an optional `<count> <dim>` header
//! followed by one `word v1 ... vD` line per entry.

use super::SentimentError;
use std::collections::HashMap;
use std::path::Path;

/// Word-vector lookup table with a fixed dimension
#[derive(Debug, Clone)]
pub struct WordEmbeddings {
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl WordEmbeddings {
    pub fn load(path: &Path) -> Result<Self, SentimentError> {
        let source = std::fs::read_to_string(path).map_err(|source| SentimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let embeddings = Self::parse(&source)?;
        tracing::info!(
            path = %path.display(),
            words = embeddings.word_count(),
            dimension = embeddings.dimension,
            "Loaded word embeddings"
        );
        Ok(embeddings)
    }

    pub fn parse(source: &str) -> Result<Self, SentimentError> {
        let mut dimension: Option<usize> = None;
        let mut vectors = HashMap::new();

        for (index, raw) in source.lines().enumerate() {
            let line_no = index + 1;
            let mut fields = raw.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            // "<count> <dim>" header
            if index == 0 && rest.len() == 1 {
                if let (Ok(_), Ok(dim)) = (word.parse::<usize>(), rest[0].parse::<usize>()) {
                    dimension = Some(dim);
                    continue;
                }
            }

            let values = rest
                .iter()
                .map(|v| v.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| SentimentError::MalformedEmbedding {
                    line: line_no,
                    message: e.to_string(),
                })?;

            let expected = *dimension.get_or_insert(values.len());
            if values.len() != expected || expected == 0 {
                return Err(SentimentError::MalformedEmbedding {
                    line: line_no,
                    message: format!("expected {expected} values, found {}", values.len()),
                });
            }
            vectors.insert(word.to_string(), values);
        }

        let dimension = dimension.ok_or_else(|| SentimentError::MalformedEmbedding {
            line: 0,
            message: "no vectors found".to_string(),
        })?;
        Ok(Self { dimension, vectors })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn word_count(&self) -> usize {
        self.vectors.len()
    }

    /// Average of the per-token vectors of whitespace-separated tokens
    ///
    /// Unknown tokens contribute zero vectors; text without tokens embeds
    /// to the zero vector.
    #[allow(clippy::cast_precision_loss)]
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut sum = vec![0.0f32; self.dimension];
        let mut count = 0usize;

        for token in text.split_whitespace() {
            count += 1;
            if let Some(vector) = self.vectors.get(token) {
                for (acc, value) in sum.iter_mut().zip(vector) {
                    *acc += value;
                }
            }
        }

        if count > 0 {
            let n = count as f32;
            for value in &mut sum {
                *value /= n;
            }
        }
        sum
    }
}
