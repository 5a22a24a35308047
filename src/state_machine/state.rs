//! Dialogue state types

use serde::{Deserialize, Serialize};

// ============================================================================
// Dialogue State
// ============================================================================

/// Where the dialogue currently is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// Greeting not yet shown
    #[default]
    Welcome,

    /// Waiting for the user's name
    CollectName,

    /// Waiting for text to classify, or for a menu answer when the
    /// sentiment turn was re-entered from the menu
    Sentiment,

    /// Waiting for text to analyze stylistically
    Stylistic,

    /// Waiting for a menu answer after a stylistic turn
    MenuCheck,

    /// Session over
    Quit,
}

impl DialogueState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DialogueState::Quit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DialogueState::Welcome => "welcome",
            DialogueState::CollectName => "collect_name",
            DialogueState::Sentiment => "sentiment",
            DialogueState::Stylistic => "stylistic",
            DialogueState::MenuCheck => "menu_check",
            DialogueState::Quit => "quit",
        }
    }
}

// ============================================================================
// Menu Choice
// ============================================================================

/// Answer to the continuation menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MenuChoice {
    Quit,
    RedoSentiment,
    RedoStylistic,
}

impl MenuChoice {
    /// State the dialogue moves to for this choice
    pub fn target(self) -> DialogueState {
        match self {
            MenuChoice::Quit => DialogueState::Quit,
            MenuChoice::RedoSentiment => DialogueState::Sentiment,
            MenuChoice::RedoStylistic => DialogueState::Stylistic,
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Session-scoped data carried between states
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Name extracted from the user's introduction, empty if none matched
    pub name: String,
    /// Whether a sentiment turn continues straight to the stylistic turn.
    /// Toggled each time the menu is answered in [`DialogueState::MenuCheck`].
    pub first_pass: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            name: String::new(),
            first_pass: true,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
}
