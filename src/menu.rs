//! Continuation menu shown after each analysis round

use crate::runtime::{Console, ConsoleError};
use crate::state_machine::MenuChoice;

/// Printed before every read
pub const MENU_TEXT: &str = "\n\
    Our ChatBot lets you run the Sentiment or Stylistic Analysis again,\n\
    or you could terminate the ChatBot immediately from this step\n\
    Which action state would you like to enter next? Below are 3 possible options:\n\
    \t\t(a) Quit\n\
    \t\t(b) Redo Sentiment Analysis\n\
    \t\t(c) Redo Stylistic Analysis";

pub const CHOICE_PROMPT: &str = "Enter your choice, only type (a) or (b) or (c) format: ";

/// Map a raw answer to a choice. Surrounding whitespace is ignored; nothing else is.
pub fn parse_choice(raw: &str) -> Option<MenuChoice> {
    match raw.trim() {
        "(a)" => Some(MenuChoice::Quit),
        "(b)" => Some(MenuChoice::RedoSentiment),
        "(c)" => Some(MenuChoice::RedoStylistic),
        _ => None,
    }
}

/// Ask until the user gives a valid choice
pub async fn prompt<C: Console + ?Sized>(console: &mut C) -> Result<MenuChoice, ConsoleError> {
    loop {
        console.say(MENU_TEXT).await?;
        let raw = console.ask(CHOICE_PROMPT).await?;
        match parse_choice(&raw) {
            Some(choice) => return Ok(choice),
            None => tracing::debug!(input = %raw.trim(), "Rejected menu input"),
        }
    }
}
