//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::state::*;
use super::transition::*;
use super::*;
use crate::style::FeatureVector;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_choice() -> impl Strategy<Value = MenuChoice> {
    prop_oneof![
        Just(MenuChoice::Quit),
        Just(MenuChoice::RedoSentiment),
        Just(MenuChoice::RedoStylistic),
    ]
}

fn arb_state() -> impl Strategy<Value = DialogueState> {
    prop_oneof![
        Just(DialogueState::Welcome),
        Just(DialogueState::CollectName),
        Just(DialogueState::Sentiment),
        Just(DialogueState::Stylistic),
        Just(DialogueState::MenuCheck),
        Just(DialogueState::Quit),
    ]
}

fn arb_session() -> impl Strategy<Value = Session> {
    ("[A-Za-z ]{0,20}", any::<bool>())
        .prop_map(|(name, first_pass)| Session { name, first_pass })
}

fn arb_features() -> impl Strategy<Value = FeatureVector> {
    (
        0usize..200,
        0.0f64..40.0,
        proptest::array::uniform7(0usize..10),
    )
        .prop_map(|(num_words, words_per_sentence, c)| FeatureVector {
            num_words,
            words_per_sentence,
            num_pronouns: c[0],
            num_personal_pronouns: c[1],
            num_articles: c[2],
            num_past_tense: c[3],
            num_future_modal: c[4],
            num_prepositions: c[5],
            num_negations: c[6],
        })
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::Start),
        "[A-Za-z ,.']{0,40}".prop_map(|text| Event::NameReply { text }),
        arb_choice().prop_map(|choice| Event::MenuSelected { choice }),
        (-2i64..4).prop_map(|label| Event::SentimentLabelled { label }),
        arb_features().prop_map(|features| Event::StyleMeasured { features }),
    ]
}

/// Event the runtime would produce in answer to a prompt
fn answer(
    prompt: &Prompt,
    text: String,
    label: i64,
    features: FeatureVector,
    choice: MenuChoice,
) -> Event {
    match prompt {
        Prompt::Name => Event::NameReply { text },
        Prompt::SentimentTopic { .. } => Event::SentimentLabelled { label },
        Prompt::StylisticTopic => Event::StyleMeasured { features },
        Prompt::Menu => Event::MenuSelected { choice },
    }
}

fn asks(effects: &[Effect]) -> Vec<&Prompt> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Ask { prompt } => Some(prompt),
            Effect::Say { .. } => None,
        })
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Invariant 1: a non-terminal state always ends its effects with one question
    #[test]
    fn prop_live_states_ask_exactly_once(
        state in arb_state(),
        session in arb_session(),
        event in arb_event(),
    ) {
        if let Ok(result) = transition(&state, &session, event) {
            let prompts = asks(&result.effects);
            if result.new_state.is_terminal() {
                prop_assert!(prompts.is_empty(), "asked after quit: {:?}", prompts);
            } else {
                prop_assert_eq!(prompts.len(), 1);
                let ends_with_ask = matches!(result.effects.last(), Some(Effect::Ask { .. }));
                prop_assert!(ends_with_ask, "last effect is not an Ask: {:?}", result.effects);
            }
        }
    }

    // Invariant 2: first_pass only changes when the menu is answered after a stylistic turn
    #[test]
    fn prop_first_pass_flips_only_at_menu_check(
        state in arb_state(),
        session in arb_session(),
        event in arb_event(),
    ) {
        let from_menu_check = state == DialogueState::MenuCheck
            && matches!(event, Event::MenuSelected { .. });
        if let Ok(result) = transition(&state, &session, event) {
            if from_menu_check {
                prop_assert_eq!(result.session.first_pass, !session.first_pass);
            } else {
                prop_assert_eq!(result.session.first_pass, session.first_pass);
            }
        }
    }

    // Invariant 3: the name is only ever set by the introduction
    #[test]
    fn prop_name_set_only_by_introduction(
        state in arb_state(),
        session in arb_session(),
        event in arb_event(),
    ) {
        let introduces = state == DialogueState::CollectName
            && matches!(event, Event::NameReply { .. });
        if let Ok(result) = transition(&state, &session, event) {
            if !introduces {
                prop_assert_eq!(&result.session.name, &session.name);
            }
        }
    }

    // Invariant 4: nothing happens after quit
    #[test]
    fn prop_quit_is_final(session in arb_session(), event in arb_event()) {
        prop_assert!(matches!(
            transition(&DialogueState::Quit, &session, event),
            Err(TransitionError::SessionOver)
        ));
    }

    // Invariant 5: answering every question keeps the dialogue going until quit
    #[test]
    fn prop_answered_dialogue_never_stalls(
        answers in proptest::collection::vec(
            ("[A-Za-z ]{0,20}", 0i64..2, arb_features(), arb_choice()),
            0..30,
        ),
    ) {
        let start = transition(&DialogueState::Welcome, &Session::new(), Event::Start);
        let result = start.unwrap();
        let mut pending = asks(&result.effects).first().map(|p| (*p).clone());
        let mut state = result.new_state;
        let mut session = result.session;

        for (text, label, features, choice) in answers {
            let Some(prompt) = pending.take() else { break };
            let event = answer(&prompt, text, label, features, choice);
            let result = transition(&state, &session, event);
            prop_assert!(result.is_ok(), "stalled in {:?} answering {:?}", state, prompt);
            let result = result.unwrap();
            pending = asks(&result.effects).first().map(|p| (*p).clone());
            state = result.new_state;
            session = result.session;
            prop_assert_eq!(state.is_terminal(), pending.is_none());
        }
    }
}
