//! Dialogue runtime executor

use super::traits::{Console, ConsoleError, SentimentClassifier, StyleAnalyzer};
use crate::menu;
use crate::nlp::NlpError;
use crate::sentiment::SentimentError;
use crate::state_machine::{
    transition, DialogueState, Effect, Event, Prompt, Session, TransitionError,
};
use thiserror::Error;

/// Errors that end a session
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error("Sentiment analysis failed: {0}")]
    Sentiment(#[from] SentimentError),
    #[error("Stylistic analysis failed: {0}")]
    Style(#[from] NlpError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

impl RuntimeError {
    /// True when the user closed the input stream
    pub fn is_closed_input(&self) -> bool {
        matches!(self, RuntimeError::Console(ConsoleError::Closed))
    }
}

/// Generic dialogue runtime that can work with any console, classifier, and analyzer
pub struct DialogueRuntime<C, S, A>
where
    C: Console,
    S: SentimentClassifier,
    A: StyleAnalyzer,
{
    session_id: String,
    state: DialogueState,
    session: Session,
    console: C,
    classifier: S,
    analyzer: A,
}

impl<C, S, A> DialogueRuntime<C, S, A>
where
    C: Console,
    S: SentimentClassifier,
    A: StyleAnalyzer,
{
    pub fn new(console: C, classifier: S, analyzer: A) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            state: DialogueState::default(),
            session: Session::new(),
            console,
            classifier,
            analyzer,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Drive the dialogue from the greeting until the user quits
    ///
    /// Returns the final session record.
    pub async fn run(mut self) -> Result<Session, RuntimeError> {
        tracing::info!(session_id = %self.session_id, "Starting dialogue");

        // Process events in a loop - no recursion
        let mut next = Some(Event::Start);
        while let Some(event) = next.take() {
            next = self.process_event(event).await?;
        }

        tracing::info!(
            session_id = %self.session_id,
            name = %self.session.name,
            first_pass = self.session.first_pass,
            "Dialogue finished"
        );
        Ok(self.session)
    }

    /// Apply one event and run its effects. Returns the answer to the
    /// question the effects asked, if any.
    async fn process_event(&mut self, event: Event) -> Result<Option<Event>, RuntimeError> {
        // Pure state transition
        let result = transition(&self.state, &self.session, event)?;

        // Update state
        let old_state = std::mem::replace(&mut self.state, result.new_state);
        if result.session.first_pass != self.session.first_pass {
            tracing::debug!(
                session_id = %self.session_id,
                first_pass = result.session.first_pass,
                "Toggled first pass"
            );
        }
        self.session = result.session;

        tracing::debug!(
            session_id = %self.session_id,
            from = old_state.as_str(),
            to = self.state.as_str(),
            effects = result.effects.len(),
            "Transition"
        );

        // Execute effects and collect the generated event
        let mut generated = None;
        for effect in result.effects {
            if let Some(event) = self.execute_effect(effect).await? {
                generated = Some(event);
            }
        }
        Ok(generated)
    }

    /// Execute an effect and optionally return a generated event
    async fn execute_effect(&mut self, effect: Effect) -> Result<Option<Event>, RuntimeError> {
        match effect {
            Effect::Say { text } => {
                self.console.say(&text).await?;
                Ok(None)
            }

            Effect::Ask { prompt } => self.answer(&prompt).await.map(Some),
        }
    }

    /// Read the user's answer to `prompt` and turn it into an event
    async fn answer(&mut self, prompt: &Prompt) -> Result<Event, RuntimeError> {
        match prompt {
            Prompt::Name => {
                let text = self.console.ask(&prompt.text()).await?;
                Ok(Event::NameReply { text })
            }

            Prompt::SentimentTopic { .. } => {
                let text = self.console.ask(&prompt.text()).await?;
                let label = self.classifier.classify(&text)?;
                tracing::debug!(session_id = %self.session_id, label, "Classified sentiment");
                Ok(Event::SentimentLabelled { label })
            }

            Prompt::StylisticTopic => {
                let text = self.console.ask(&prompt.text()).await?;
                let features = self.analyzer.analyze(&text)?;
                tracing::debug!(
                    session_id = %self.session_id,
                    num_words = features.num_words,
                    words_per_sentence = features.words_per_sentence,
                    "Measured style"
                );
                Ok(Event::StyleMeasured { features })
            }

            Prompt::Menu => {
                let choice = menu::prompt(&mut self.console).await?;
                tracing::debug!(session_id = %self.session_id, ?choice, "Menu answered");
                Ok(Event::MenuSelected { choice })
            }
        }
    }
}
