//! Sentiment model error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid embedding file at line {line}: {message}")]
    MalformedEmbedding { line: usize, message: String },

    #[error("Invalid model file {path}: {source}")]
    MalformedModel {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model expects {expected} dimensions, embedding has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
