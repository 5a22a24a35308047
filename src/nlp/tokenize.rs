//! Penn Treebank style tokenizer
//!
//! Words are produced sentence by sentence so that only the sentence-final
//! period is split off a word (`"Mr. Smith left."` keeps `Mr.` intact).

use super::{NlpError, Tokenizer};
use regex::Regex;
use std::sync::LazyLock;

/// Abbreviations that do not end a sentence (compared lowercased, without the final period)
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "mt", "ft", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "dept", "gen", "gov", "lt", "col", "sgt", "rev", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "approx", "fig",
];

/// Characters that may trail a sentence terminator and still belong to the sentence
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '»', '”', '’'];

fn rule(pattern: &str, replacement: &'static str) -> (Regex, &'static str) {
    (
        Regex::new(pattern).unwrap_or_else(|e| panic!("invalid tokenizer rule {pattern}: {e}")),
        replacement,
    )
}

static STARTING_QUOTES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        rule(r#"^""#, "``"),
        rule(r"(``)", " ${1} "),
        rule(r#"([ (\[{<])("|'')"#, "${1} `` "),
    ]
});

static PUNCTUATION: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        rule(r"([:,])([^\d])", " ${1} ${2}"),
        rule(r"([:,])$", " ${1} "),
        rule(r"\.\.\.", " ... "),
        rule(r"[;@#$%&]", " ${0} "),
        rule(r#"([^.])(\.)([\])}>"']*)\s*$"#, "${1} ${2}${3} "),
        rule(r"[?!]", " ${0} "),
        rule(r"([^'])' ", "${1} ' "),
        rule(r"[\]\[(){}<>]", " ${0} "),
        rule(r"--", " -- "),
    ]
});

static ENDING_QUOTES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        rule(r#"""#, " '' "),
        rule(r"(\S)('')", "${1} ${2} "),
        rule(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        rule(r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ]
});

static CONTRACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        rule(r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        rule(r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        rule(r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        rule(r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        rule(r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        rule(r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        rule(r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
    ]
});

fn apply(rules: &[(Regex, &'static str)], text: String) -> String {
    rules.iter().fold(text, |acc, (re, replacement)| {
        re.replace_all(&acc, *replacement).into_owned()
    })
}

/// Rule-based tokenizer following Penn Treebank conventions
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl TreebankTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Tokenize one sentence
    fn sentence_words(sentence: &str) -> Vec<String> {
        let text = apply(&STARTING_QUOTES, sentence.to_string());
        let text = apply(&PUNCTUATION, text);
        // Pad so clitic rules also match at the end of the sentence
        let text = apply(&ENDING_QUOTES, format!(" {text} "));
        let text = apply(&CONTRACTIONS, text);
        text.split_whitespace().map(str::to_string).collect()
    }
}

/// Capitalized words that usually open a sentence rather than continue a name
#[rustfmt::skip]
const SENTENCE_STARTERS: &[&str] = &[
    "a", "after", "all", "also", "an", "and", "as", "at", "before", "but", "he", "her", "his",
    "how", "i", "if", "in", "it", "its", "my", "no", "now", "of", "on", "one", "our", "she",
    "so", "some", "that", "the", "their", "then", "there", "these", "they", "this", "those",
    "to", "we", "what", "when", "where", "which", "who", "why", "yes", "you", "your",
];

fn strip_wrapping(word: &str) -> &str {
    word.trim_start_matches(['(', '[', '"', '\''])
}

/// Single letters or dotted letters such as "J" or "U.S", the pronoun "I" excluded
fn is_initials(word: &str) -> bool {
    word != "I"
        && word.chars().next().is_some_and(char::is_uppercase)
        && word
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
}

/// Whether a period ending `candidate` belongs to an abbreviation or an
/// initial, given the text that follows it
fn continues_after_period(candidate: &str, following: &str) -> bool {
    let Some(last) = candidate.split_whitespace().next_back() else {
        return false;
    };
    let word = strip_wrapping(last).trim_end_matches('.');
    if word.is_empty() {
        return false;
    }

    if ABBREVIATIONS.contains(&word.to_lowercase().as_str()) {
        return true;
    }
    if !is_initials(word) {
        return false;
    }

    // An initial is followed by more of the name: "J. R. Tolkien", not "Plan A. It worked."
    let Some(next) = following.split_whitespace().next().map(strip_wrapping) else {
        return false;
    };
    let bare: String = next
        .chars()
        .take_while(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    next.chars().next().is_some_and(char::is_uppercase)
        && !SENTENCE_STARTERS.contains(&bare.as_str())
}

impl Tokenizer for TreebankTokenizer {
    fn words(&self, text: &str) -> Result<Vec<String>, NlpError> {
        Ok(self
            .sentences(text)?
            .iter()
            .flat_map(|sentence| Self::sentence_words(sentence))
            .collect())
    }

    fn sentences(&self, text: &str) -> Result<Vec<String>, NlpError> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((idx, c)) = chars.next() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }

            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if matches!(next, '.' | '!' | '?') || CLOSERS.contains(&next) {
                    end = next_idx + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let boundary = match chars.peek() {
                None => true,
                Some(&(_, next)) => next.is_whitespace(),
            };
            if !boundary {
                continue;
            }

            let candidate = text.get(start..end).unwrap_or_default();
            let following = text.get(end..).unwrap_or_default();
            if c == '.' && chars.peek().is_some() && continues_after_period(candidate, following) {
                continue;
            }

            let trimmed = candidate.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            start = end;
        }

        let rest = text.get(start..).unwrap_or_default().trim();
        if !rest.is_empty() {
            sentences.push(rest.to_string());
        }

        Ok(sentences)
    }
}
