//! Text-processing error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NlpError {
    #[error("Failed to read lexicon {path}: {source}")]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed lexicon entry at line {line}: {content:?}")]
    MalformedLexicon { line: usize, content: String },

    #[error("Tagger returned {tagged} tags for {tokens} tokens")]
    TagCountMismatch { tokens: usize, tagged: usize },
}
