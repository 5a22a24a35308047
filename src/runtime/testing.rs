//! Mock implementations for testing
//!
//! These mocks enable integration testing without real I/O.

use super::traits::*;
use crate::nlp::NlpError;
use crate::sentiment::SentimentError;
use crate::style::FeatureVector;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

// ============================================================================
// Scripted Console
// ============================================================================

/// Console that answers from a fixed script and records everything written
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Everything written so far, prompts included
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Unread script lines
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    async fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.push_str(prompt);
        self.inputs.pop_front().ok_or(ConsoleError::Closed)
    }
}

// ============================================================================
// Mock Classifier
// ============================================================================

/// Classifier that returns queued labels, then a fallback
pub struct MockClassifier {
    labels: Mutex<VecDeque<i64>>,
    fallback: i64,
    /// Record of all texts classified
    pub texts: Mutex<Vec<String>>,
}

impl MockClassifier {
    pub fn new(labels: impl IntoIterator<Item = i64>) -> Self {
        Self {
            labels: Mutex::new(labels.into_iter().collect()),
            fallback: 1,
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl SentimentClassifier for MockClassifier {
    fn classify(&self, text: &str) -> Result<i64, SentimentError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(self.labels.lock().unwrap().pop_front().unwrap_or(self.fallback))
    }
}

// ============================================================================
// Mock Style Analyzer
// ============================================================================

/// Analyzer that returns a fixed feature vector, or fails
pub struct MockStyleAnalyzer {
    features: Option<FeatureVector>,
    /// Record of all texts analyzed
    pub texts: Mutex<Vec<String>>,
}

impl MockStyleAnalyzer {
    pub fn new(features: FeatureVector) -> Self {
        Self {
            features: Some(features),
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            features: None,
            texts: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

impl StyleAnalyzer for MockStyleAnalyzer {
    fn analyze(&self, text: &str) -> Result<FeatureVector, NlpError> {
        self.texts.lock().unwrap().push(text.to_string());
        self.features
            .clone()
            .ok_or(NlpError::TagCountMismatch { tokens: 1, tagged: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{DialogueRuntime, RuntimeError};
    use crate::state_machine::transition::{CORRELATES_INTRO, FAREWELL, GREETING};
    use std::sync::Arc;

    fn features() -> FeatureVector {
        FeatureVector {
            num_words: 12,
            words_per_sentence: 6.0,
            num_pronouns: 1,
            num_personal_pronouns: 4,
            num_past_tense: 2,
            ..FeatureVector::default()
        }
    }

    #[tokio::test]
    async fn test_scripted_console() {
        let mut console = ScriptedConsole::new(["first"]);
        console.say("hello").await.unwrap();
        assert_eq!(console.ask("? ").await.unwrap(), "first");
        assert!(matches!(console.ask("? ").await, Err(ConsoleError::Closed)));
        assert_eq!(console.output(), "hello\n? ? ");
    }

    /// Integration test: one full round, then quit
    #[tokio::test]
    async fn test_single_round_then_quit() {
        let mut console = ScriptedConsole::new([
            "I am Ada Lovelace",
            "I love long walks",
            "We walked to the river and talked.",
            "(a)",
        ]);
        let classifier = Arc::new(MockClassifier::new([1]));
        let analyzer = Arc::new(MockStyleAnalyzer::new(features()));

        let rt = DialogueRuntime::new(&mut console, classifier.clone(), analyzer.clone());
        let session = rt.run().await.unwrap();

        assert_eq!(session.name, "Ada Lovelace");
        assert!(!session.first_pass);
        assert_eq!(classifier.recorded_texts(), vec!["I love long walks"]);
        assert_eq!(
            analyzer.recorded_texts(),
            vec!["We walked to the river and talked."]
        );

        let out = console.output();
        assert!(out.starts_with(GREETING));
        assert!(out.contains("What is your name?\n"));
        assert!(out.contains("Thanks Ada Lovelace!  What do you want to talk about today?\n"));
        assert!(out.contains("It sounds like you're in a positive mood!\n"));
        assert!(out.contains(CORRELATES_INTRO));
        assert!(out.contains(
            "- Personal, social\n- Focused on the past\n- Informal, personal\n"
        ));
        assert!(out.ends_with(&format!("{FAREWELL}\n")));
        assert_eq!(console.remaining(), 0);
    }

    /// Regression: with first_pass cleared, redoing sentiment goes straight
    /// to the menu and answering it there does not toggle first_pass
    #[tokio::test]
    async fn test_redo_sentiment_skips_stylistic() {
        let mut console = ScriptedConsole::new([
            "Mary Shelley",
            "first topic",
            "first style",
            "(b)",
            "second topic",
            "(b)",
            "third topic",
            "(c)",
            "second style",
            "(a)",
        ]);
        let classifier = Arc::new(MockClassifier::new([0, 1, 0]));
        let analyzer = Arc::new(MockStyleAnalyzer::new(features()));

        let rt = DialogueRuntime::new(&mut console, classifier.clone(), analyzer.clone());
        let session = rt.run().await.unwrap();

        assert_eq!(
            classifier.recorded_texts(),
            vec!["first topic", "second topic", "third topic"]
        );
        assert_eq!(analyzer.recorded_texts(), vec!["first style", "second style"]);
        // Flipped at the first and last menu, untouched in between
        assert!(session.first_pass);

        let out = console.output();
        assert_eq!(out.matches("What's on your mind today?").count(), 2);
        assert_eq!(out.matches("(a) Quit").count(), 4);
        assert_eq!(
            out.matches("Hmm, it seems like you're feeling a bit down.").count(),
            2
        );
    }

    #[tokio::test]
    async fn test_unexpected_label_does_not_stop_dialogue() {
        let mut console = ScriptedConsole::new(["Alan Turing", "anything", "style", "(a)"]);
        let rt = DialogueRuntime::new(
            &mut console,
            MockClassifier::new([7]),
            MockStyleAnalyzer::new(FeatureVector::default()),
        );
        rt.run().await.unwrap();

        let out = console.output();
        assert!(out.contains("Hmm, that's weird.  My classifier predicted a value of: 7\n"));
        assert!(out.contains("I'd also like to do a quick stylistic analysis."));
    }

    #[tokio::test]
    async fn test_invalid_menu_input_reprompts() {
        let mut console =
            ScriptedConsole::new(["Alan Turing", "topic", "style", "quit", "(z)", " (a) "]);
        let rt = DialogueRuntime::new(
            &mut console,
            MockClassifier::new([1]),
            MockStyleAnalyzer::new(features()),
        );
        let session = rt.run().await.unwrap();

        assert!(!session.first_pass);
        assert_eq!(console.output().matches("(b) Redo Sentiment Analysis").count(), 3);
        assert_eq!(console.remaining(), 0);
    }

    #[tokio::test]
    async fn test_closed_input_ends_session() {
        let mut console = ScriptedConsole::new(["Grace Hopper"]);
        let rt = DialogueRuntime::new(
            &mut console,
            MockClassifier::new([]),
            MockStyleAnalyzer::new(features()),
        );
        let err = rt.run().await.unwrap_err();
        assert!(err.is_closed_input());
    }

    #[tokio::test]
    async fn test_analysis_failure_is_fatal() {
        let mut console = ScriptedConsole::new(["Grace Hopper", "topic", "style", "(a)"]);
        let rt = DialogueRuntime::new(
            &mut console,
            MockClassifier::new([1]),
            MockStyleAnalyzer::failing(),
        );
        let err = rt.run().await.unwrap_err();
        assert!(matches!(err, RuntimeError::Style(_)));
        assert!(!err.is_closed_input());
        assert_eq!(console.remaining(), 1);
    }
}
