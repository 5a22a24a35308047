//! Runtime for executing a dialogue session
//!
//! Owns the state and session record, applies transitions, and turns each
//! question the state machine asks into the next event.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::{DialogueRuntime, RuntimeError};
pub use traits::*;

use crate::nlp::{LexiconTagger, TreebankTokenizer};
use crate::sentiment::SentimentModel;
use crate::style::FeatureCounter;

/// Type alias for production runtime with concrete implementations
pub type ProductionRuntime = DialogueRuntime<
    StdioConsole,
    SentimentModel,
    FeatureCounter<TreebankTokenizer, LexiconTagger>,
>;
