//! Lexicon and suffix-rule part-of-speech tagger
//!
//! Closed-class words (pronouns, determiners, modals, prepositions,
//! auxiliaries) are looked up exactly; open-class words fall back to
//! suffix heuristics. Good enough for the category counts the stylistic
//! analysis needs, not a general purpose tagger.

use super::{NlpError, PosTagger, TaggedToken};
use std::collections::HashMap;
use std::path::Path;

#[rustfmt::skip]
const LEXICON: &[(&str, &str)] = &[
    // Personal pronouns
    ("i", "PRP"), ("me", "PRP"), ("you", "PRP"), ("he", "PRP"), ("him", "PRP"),
    ("she", "PRP"), ("it", "PRP"), ("we", "PRP"), ("us", "PRP"), ("they", "PRP"),
    ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"), ("himself", "PRP"),
    ("herself", "PRP"), ("itself", "PRP"), ("ourselves", "PRP"), ("yourselves", "PRP"),
    ("themselves", "PRP"), ("'em", "PRP"),
    // Possessive pronouns
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("its", "PRP$"), ("our", "PRP$"),
    ("their", "PRP$"),
    // Wh-words
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whoever", "WP"), ("whatever", "WP"),
    ("whose", "WP$"), ("which", "WDT"), ("whichever", "WDT"), ("when", "WRB"),
    ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    // Determiners
    ("the", "DT"), ("a", "DT"), ("an", "DT"), ("this", "DT"), ("these", "DT"),
    ("those", "DT"), ("some", "DT"), ("any", "DT"), ("each", "DT"), ("every", "DT"),
    ("all", "DT"), ("no", "DT"), ("another", "DT"), ("either", "DT"), ("neither", "DT"),
    ("both", "DT"),
    // Modals
    ("will", "MD"), ("would", "MD"), ("shall", "MD"), ("should", "MD"), ("can", "MD"),
    ("could", "MD"), ("may", "MD"), ("might", "MD"), ("must", "MD"), ("'ll", "MD"),
    ("'d", "MD"), ("wo", "MD"), ("ca", "MD"), ("ought", "MD"),
    // Prepositions and subordinating conjunctions
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"), ("for", "IN"),
    ("with", "IN"), ("about", "IN"), ("against", "IN"), ("between", "IN"), ("into", "IN"),
    ("through", "IN"), ("during", "IN"), ("before", "IN"), ("after", "IN"), ("above", "IN"),
    ("below", "IN"), ("from", "IN"), ("over", "IN"), ("under", "IN"), ("since", "IN"),
    ("until", "IN"), ("while", "IN"), ("because", "IN"), ("although", "IN"),
    ("though", "IN"), ("if", "IN"), ("whether", "IN"), ("than", "IN"), ("like", "IN"),
    ("upon", "IN"), ("within", "IN"), ("without", "IN"), ("toward", "IN"),
    ("towards", "IN"), ("across", "IN"), ("behind", "IN"), ("beyond", "IN"), ("near", "IN"),
    ("among", "IN"), ("around", "IN"), ("onto", "IN"), ("per", "IN"), ("via", "IN"),
    ("despite", "IN"), ("unless", "IN"), ("as", "IN"), ("that", "IN"), ("throughout", "IN"),
    ("beside", "IN"), ("besides", "IN"), ("along", "IN"), ("amid", "IN"), ("past", "IN"),
    // Other closed classes
    ("to", "TO"), ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    ("not", "RB"), ("n't", "RB"), ("never", "RB"), ("very", "RB"), ("also", "RB"),
    ("just", "RB"), ("too", "RB"), ("really", "RB"), ("always", "RB"), ("often", "RB"),
    ("so", "RB"), ("then", "RB"), ("now", "RB"), ("here", "RB"), ("there", "RB"),
    ("up", "RP"), ("out", "RP"), ("off", "RP"), ("down", "RP"),
    ("yes", "UH"), ("oh", "UH"), ("hello", "UH"), ("hi", "UH"), ("please", "UH"),
    // Auxiliaries
    ("be", "VB"), ("am", "VBP"), ("are", "VBP"), ("'re", "VBP"), ("'m", "VBP"),
    ("is", "VBZ"), ("was", "VBD"), ("were", "VBD"), ("been", "VBN"), ("being", "VBG"),
    ("have", "VBP"), ("'ve", "VBP"), ("has", "VBZ"), ("had", "VBD"), ("do", "VBP"),
    ("does", "VBZ"), ("did", "VBD"), ("done", "VBN"), ("having", "VBG"),
];

/// Simple past forms that differ from the participle, or whose participle is identical
#[rustfmt::skip]
const IRREGULAR_PAST: &[&str] = &[
    "went", "said", "made", "took", "came", "saw", "knew", "got", "gave", "found", "thought",
    "told", "became", "left", "felt", "brought", "began", "kept", "held", "wrote", "stood",
    "heard", "meant", "met", "ran", "paid", "sat", "spoke", "led", "grew", "lost", "fell",
    "sent", "built", "understood", "drew", "broke", "spent", "rose", "drove", "bought", "wore",
    "chose", "ate", "forgot", "sold", "taught", "caught", "fought", "won", "slept", "flew",
    "threw", "sang", "swam", "hid", "stole", "dreamt", "learnt", "sought", "swore",
    "woke", "shook", "rode", "froze", "bit", "lay", "sank", "drank", "rang", "struck",
];

#[rustfmt::skip]
const IRREGULAR_PARTICIPLE: &[&str] = &[
    "gone", "seen", "known", "taken", "given", "written", "eaten", "spoken", "broken",
    "chosen", "forgotten", "driven", "grown", "thrown", "flown", "fallen", "begun", "sung",
    "swum", "hidden", "stolen", "worn", "risen", "drawn", "become", "run", "woken", "shaken",
    "ridden", "frozen", "bitten", "sunk", "drunk", "rung", "sworn", "gotten",
];

/// Words ending in "-ed" that are not verbs
#[rustfmt::skip]
const ED_EXCEPTIONS: &[&str] = &[
    "bed", "red", "shed", "fed", "wed", "sled", "shred", "need", "feed", "seed", "speed",
    "bleed", "breed", "greed", "deed", "weed", "reed", "indeed", "hundred", "sacred", "naked",
    "wicked", "kindred", "rugged", "ragged", "wretched",
];

/// Auxiliaries after which a past form is tagged as a participle
#[rustfmt::skip]
const PARTICIPLE_TRIGGERS: &[&str] = &[
    "have", "has", "had", "'ve", "having", "is", "are", "was", "were", "be", "been", "being",
    "am", "'m", "'re", "get", "got", "gets",
];

/// Penn tag for a punctuation-only token
fn punctuation_tag(token: &str) -> Option<&'static str> {
    let tag = match token {
        "." | "!" | "?" => ".",
        "," => ",",
        ":" | ";" | "..." | "--" | "-" => ":",
        "``" => "``",
        "''" | "'" => "''",
        "(" | "[" | "{" | "<" => "(",
        ")" | "]" | "}" | ">" => ")",
        "$" => "$",
        "#" => "#",
        _ if !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation()) => ":",
        _ => return None,
    };
    Some(tag)
}

/// Tagger backed by a closed-class lexicon and suffix rules
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: HashMap<String, String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let lexicon = LEXICON
            .iter()
            .map(|(word, tag)| ((*word).to_string(), (*tag).to_string()))
            .collect();
        Self { lexicon }
    }

    /// Add user entries (`word<TAB>TAG` per line, `#` comments) overriding the built-ins
    pub fn with_entries(mut self, source: &str) -> Result<Self, NlpError> {
        for (index, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            match (fields.next(), fields.next(), fields.next()) {
                (Some(word), Some(tag), None)
                    if !word.trim().is_empty() && !tag.trim().is_empty() =>
                {
                    self.lexicon
                        .insert(word.trim().to_lowercase(), tag.trim().to_string());
                }
                _ => {
                    return Err(NlpError::MalformedLexicon {
                        line: index + 1,
                        content: raw.to_string(),
                    })
                }
            }
        }
        Ok(self)
    }

    /// Load user entries from a lexicon file
    pub fn with_lexicon_file(self, path: &Path) -> Result<Self, NlpError> {
        let source = std::fs::read_to_string(path).map_err(|source| NlpError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;
        let tagger = self.with_entries(&source)?;
        tracing::info!(
            path = %path.display(),
            entries = tagger.lexicon.len(),
            "Loaded tagger lexicon"
        );
        Ok(tagger)
    }

    fn tag_token(
        &self,
        token: &str,
        previous: Option<&str>,
        next: Option<&str>,
        sentence_start: bool,
    ) -> String {
        if let Some(tag) = punctuation_tag(token) {
            return tag.to_string();
        }

        let lower = token.to_lowercase();

        // "her" is possessive when it heads a noun phrase
        if lower == "her" {
            let possessive = next.is_some_and(|n| {
                punctuation_tag(n).is_none() && !self.lexicon.contains_key(&n.to_lowercase())
            });
            return if possessive { "PRP$" } else { "PRP" }.to_string();
        }

        if let Some(tag) = self.lexicon.get(&lower) {
            return tag.clone();
        }

        let after_auxiliary =
            previous.is_some_and(|p| PARTICIPLE_TRIGGERS.contains(&p.to_lowercase().as_str()));

        if IRREGULAR_PARTICIPLE.contains(&lower.as_str()) {
            return "VBN".to_string();
        }
        if IRREGULAR_PAST.contains(&lower.as_str()) {
            return if after_auxiliary { "VBN" } else { "VBD" }.to_string();
        }

        if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
            && token.chars().any(|c| c.is_ascii_digit())
        {
            return "CD".to_string();
        }

        if !sentence_start && token.chars().next().is_some_and(char::is_uppercase) {
            return "NNP".to_string();
        }

        let len = lower.chars().count();
        if lower.ends_with("ed") && len > 3 && !ED_EXCEPTIONS.contains(&lower.as_str()) {
            return if after_auxiliary { "VBN" } else { "VBD" }.to_string();
        }
        if lower.ends_with("ing") && len > 4 {
            return "VBG".to_string();
        }
        if lower.ends_with("ly") && len > 3 {
            return "RB".to_string();
        }
        if lower.ends_with('s') && !lower.ends_with("ss") && len > 3 {
            return "NNS".to_string();
        }
        "NN".to_string()
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>, NlpError> {
        let mut tagged: Vec<TaggedToken> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let previous = i.checked_sub(1).and_then(|p| tokens.get(p)).map(String::as_str);
            let next = tokens.get(i + 1).map(String::as_str);
            let sentence_start = tagged.last().map_or(true, |(_, tag)| tag == "." || tag == "``");
            let tag = self.tag_token(token, previous, next, sentence_start);
            tagged.push((token.clone(), tag));
        }
        Ok(tagged)
    }
}
