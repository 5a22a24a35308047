//! Sentiment Chatbot - console sentiment and style analysis
//!
//! A dialogue state machine that classifies the sentiment of what the user
//! writes and reports psychological correlates of their writing style.

mod config;
mod menu;
mod nlp;
mod runtime;
mod sentiment;
mod state_machine;
mod style;
mod user_info;

use config::{ChatbotConfig, DEFAULT_LOG_FILTER};
use nlp::{LexiconTagger, TreebankTokenizer};
use runtime::{ProductionRuntime, StdioConsole};
use sentiment::SentimentModel;
use style::FeatureCounter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; stdout belongs to the dialogue
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Configuration
    let config = ChatbotConfig::from_env();

    // Load models
    tracing::info!(
        embeddings = %config.embeddings_path.display(),
        model = %config.model_path.display(),
        "Loading sentiment model"
    );
    let model = SentimentModel::load(&config.embeddings_path, &config.model_path)?;

    let mut tagger = LexiconTagger::new();
    if let Some(path) = &config.lexicon_path {
        tracing::info!(path = %path.display(), "Loading tagger lexicon");
        tagger = tagger.with_lexicon_file(path)?;
    }
    let analyzer = FeatureCounter::new(TreebankTokenizer::new(), tagger);

    let runtime = ProductionRuntime::new(StdioConsole::new(), model, analyzer);
    let session_id = runtime.session_id().to_string();

    match runtime.run().await {
        Ok(_) => Ok(()),
        Err(e) if e.is_closed_input() => {
            tracing::info!(session_id = %session_id, "Input closed, ending session");
            Ok(())
        }
        Err(e) => {
            tracing::error!(session_id = %session_id, error = %e, "Session failed");
            Err(e.into())
        }
    }
}
