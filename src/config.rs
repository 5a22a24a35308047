//! Environment configuration

use std::path::PathBuf;

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "sentiment_chatbot=warn";

const DEFAULT_EMBEDDINGS: &str = "w2v.txt";
const DEFAULT_MODEL: &str = "sentiment_model.json";

/// Locations of the model files loaded at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatbotConfig {
    /// Word vectors in word2vec text format
    pub embeddings_path: PathBuf,
    /// Linear sentiment model as JSON
    pub model_path: PathBuf,
    /// Extra tagger lexicon, `word<TAB>TAG` per line
    pub lexicon_path: Option<PathBuf>,
}

impl ChatbotConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            embeddings_path: set("CHATBOT_EMBEDDINGS")
                .unwrap_or_else(|| DEFAULT_EMBEDDINGS.to_string())
                .into(),
            model_path: set("CHATBOT_MODEL")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string())
                .into(),
            lexicon_path: set("CHATBOT_LEXICON").map(PathBuf::from),
        }
    }
}
