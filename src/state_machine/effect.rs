//! Effects produced by state transitions

/// Questions the runtime asks the user. Each answer becomes the next event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Free text containing the user's name
    Name,
    /// Free text for sentiment classification
    SentimentTopic { name: String },
    /// Free text for stylistic analysis
    StylisticTopic,
    /// The three-option continuation menu
    Menu,
}

impl Prompt {
    /// Text written before reading the answer. The menu renders its own text.
    pub fn text(&self) -> String {
        match self {
            Prompt::Name => "What is your name?\n".to_string(),
            Prompt::SentimentTopic { name } => {
                format!("Thanks {name}!  What do you want to talk about today?\n")
            }
            Prompt::StylisticTopic => {
                "I'd also like to do a quick stylistic analysis. What's on your mind today?\n"
                    .to_string()
            }
            Prompt::Menu => String::new(),
        }
    }
}

/// Effects to be executed after state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Print a line
    Say { text: String },

    /// Read the user's answer to a prompt
    Ask { prompt: Prompt },
}

impl Effect {
    pub fn say(text: impl Into<String>) -> Self {
        Effect::Say { text: text.into() }
    }

    pub fn ask(prompt: Prompt) -> Self {
        Effect::Ask { prompt }
    }
}
