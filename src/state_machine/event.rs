//! Events that drive the dialogue

use crate::state_machine::state::MenuChoice;
use crate::style::FeatureVector;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// Session started
    Start,

    // User replies
    NameReply {
        text: String,
    },
    MenuSelected {
        choice: MenuChoice,
    },

    // Analysis results
    SentimentLabelled {
        label: i64,
    },
    StyleMeasured {
        features: FeatureVector,
    },
}
