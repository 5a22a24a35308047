//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the executor with mock implementations.

use crate::nlp::{NlpError, PosTagger, Tokenizer};
use crate::sentiment::{SentimentError, SentimentModel};
use crate::style::{FeatureCounter, FeatureVector};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

/// Errors from the console
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed")]
    Closed,
}

/// Line-oriented user console
#[async_trait]
pub trait Console: Send {
    /// Print `text` followed by a newline
    async fn say(&mut self, text: &str) -> Result<(), ConsoleError>;

    /// Print `prompt` as is, then read one line without its line terminator
    async fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError>;
}

/// Classifier that labels free text
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<i64, SentimentError>;
}

/// Stylistic feature extraction
pub trait StyleAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<FeatureVector, NlpError>;
}

// ============================================================================
// Blanket implementations
// ============================================================================

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for Arc<T> {
    fn classify(&self, text: &str) -> Result<i64, SentimentError> {
        (**self).classify(text)
    }
}

impl<T: StyleAnalyzer + ?Sized> StyleAnalyzer for Arc<T> {
    fn analyze(&self, text: &str) -> Result<FeatureVector, NlpError> {
        (**self).analyze(text)
    }
}

#[async_trait]
impl<T: Console + ?Sized> Console for &mut T {
    async fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        (**self).say(text).await
    }

    async fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        (**self).ask(prompt).await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Console over the process's stdin and stdout
pub struct StdioConsole {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            stdout: tokio::io::stdout(),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdioConsole {
    async fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.stdout.write_all(text.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        self.stdout.flush().await?;
        Ok(())
    }

    async fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.stdout.write_all(prompt.as_bytes()).await?;
        self.stdout.flush().await?;
        match self.lines.next_line().await? {
            Some(line) => Ok(line.trim_end_matches('\r').to_string()),
            None => Err(ConsoleError::Closed),
        }
    }
}

impl SentimentClassifier for SentimentModel {
    fn classify(&self, text: &str) -> Result<i64, SentimentError> {
        self.predict(text)
    }
}

impl<T: Tokenizer, P: PosTagger> StyleAnalyzer for FeatureCounter<T, P> {
    fn analyze(&self, text: &str) -> Result<FeatureVector, NlpError> {
        self.count(text)
    }
}
