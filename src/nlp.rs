//! Tokenization and part-of-speech tagging
//!
//! Provides the text-processing collaborators consumed by the stylistic
//! analysis: a word/sentence tokenizer and a Penn Treebank tagger.

mod error;
mod tagger;
mod tokenize;

pub use error::NlpError;
pub use tagger::LexiconTagger;
pub use tokenize::TreebankTokenizer;

/// A token paired with its Penn Treebank tag
pub type TaggedToken = (String, String);

/// Splits text into words and sentences
pub trait Tokenizer: Send + Sync {
    /// Word tokens, punctuation included as separate tokens
    fn words(&self, text: &str) -> Result<Vec<String>, NlpError>;

    /// Sentences in order of appearance. Blank text yields no sentences.
    fn sentences(&self, text: &str) -> Result<Vec<String>, NlpError>;
}

/// Assigns a Penn Treebank tag to every token
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, NlpError>;
}
