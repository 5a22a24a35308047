//! Pure state transition function
//!
//! Welcome → CollectName → Sentiment → Stylistic → MenuCheck, then back to
//! Sentiment or Stylistic, or on to Quit, as the menu directs.

use super::state::{DialogueState, Session};
use super::{Effect, Event, Prompt};
use crate::sentiment::SentimentLabel;
use crate::style::rank;
use crate::user_info::extract_name;
use thiserror::Error;

pub const GREETING: &str = "Welcome to the sentiment and style chatbot!  ";

pub const CORRELATES_INTRO: &str = "Thanks!  Based on my stylistic analysis, I've identified \
    the following psychological correlates in your response:";

pub const FAREWELL: &str = "\n************************************\n\
    Thank you for choosing the ChatBot!!\n\
    ************************************";

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: DialogueState,
    pub session: Session,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: DialogueState, session: Session) -> Self {
        Self {
            new_state: state,
            session,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Session has already ended")]
    SessionOver,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
pub fn transition(
    state: &DialogueState,
    session: &Session,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Introduction
        // ============================================================
        (DialogueState::Welcome, Event::Start) => {
            Ok(TransitionResult::new(DialogueState::CollectName, session.clone())
                .with_effect(Effect::say(GREETING))
                .with_effect(Effect::ask(Prompt::Name)))
        }

        (DialogueState::CollectName, Event::NameReply { text }) => {
            let session = Session {
                name: extract_name(&text),
                ..session.clone()
            };
            let prompt = Prompt::SentimentTopic {
                name: session.name.clone(),
            };
            Ok(TransitionResult::new(DialogueState::Sentiment, session)
                .with_effect(Effect::ask(prompt)))
        }

        // ============================================================
        // Sentiment
        // ============================================================

        // First pass continues to the stylistic turn
        (DialogueState::Sentiment, Event::SentimentLabelled { label }) if session.first_pass => {
            Ok(TransitionResult::new(DialogueState::Stylistic, session.clone())
                .with_effect(Effect::say(SentimentLabel::from_label(label).message()))
                .with_effect(Effect::ask(Prompt::StylisticTopic)))
        }

        // Later passes ask the menu from the sentiment state itself
        (DialogueState::Sentiment, Event::SentimentLabelled { label }) => {
            Ok(TransitionResult::new(DialogueState::Sentiment, session.clone())
                .with_effect(Effect::say(SentimentLabel::from_label(label).message()))
                .with_effect(Effect::ask(Prompt::Menu)))
        }

        // Menu answered from the sentiment state: first_pass is left alone
        (DialogueState::Sentiment, Event::MenuSelected { choice }) => {
            Ok(enter(choice.target(), session.clone()))
        }

        // ============================================================
        // Stylistic analysis
        // ============================================================
        (DialogueState::Stylistic, Event::StyleMeasured { features }) => {
            let correlates = rank(&features);
            Ok(TransitionResult::new(DialogueState::MenuCheck, session.clone())
                .with_effect(Effect::say(CORRELATES_INTRO))
                .with_effects(
                    correlates
                        .into_iter()
                        .map(|correlate| Effect::say(format!("- {correlate}"))),
                )
                .with_effect(Effect::ask(Prompt::Menu)))
        }

        // ============================================================
        // Menu
        // ============================================================
        (DialogueState::MenuCheck, Event::MenuSelected { choice }) => {
            let session = Session {
                first_pass: !session.first_pass,
                ..session.clone()
            };
            Ok(enter(choice.target(), session))
        }

        // ============================================================
        // Invalid Transitions
        // ============================================================
        (DialogueState::Quit, _) => Err(TransitionError::SessionOver),

        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {state:?} with event {event:?}"
        ))),
    }
}

/// Transition into `target` as chosen from the menu
fn enter(target: DialogueState, session: Session) -> TransitionResult {
    let effects = match target {
        DialogueState::Quit => vec![Effect::say(FAREWELL)],
        DialogueState::Sentiment => vec![Effect::ask(Prompt::SentimentTopic {
            name: session.name.clone(),
        })],
        DialogueState::Stylistic => vec![Effect::ask(Prompt::StylisticTopic)],
        // Not reachable from a menu choice
        DialogueState::Welcome | DialogueState::CollectName | DialogueState::MenuCheck => vec![],
    };
    TransitionResult::new(target, session).with_effects(effects)
}
