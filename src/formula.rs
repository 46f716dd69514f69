//! Checks a typed grammar formula such as `"S + have/has + V3"`.
//!
//! The check is keyword presence, not string equality: case, punctuation,
//! spacing and which spelling of an auxiliary group the learner picks do not
//! matter, but a structurally required piece (the auxiliary, `not`, the verb
//! slot) must be there.
//!
//! Slots can be written in notation (`S`, `V`, `V3`, `V-ing`, ...) or filled
//! with real words: `"she has gone"` satisfies `S + have/has + V3` just like
//! `"S + has + V3"` does.

use std::sync::LazyLock;

use regex::Regex;

use crate::lexicon::Lexicon;
use crate::matcher::{V3_SUFFIX, V_ED, V_ING, contains_any_word, contains_word};
use crate::normalize::normalize;

/// Auxiliary alternatives as written in canonical formulas.
const CHOICE_GROUPS: [(&str, &[&str]); 4] = [
    ("do/does", &["do", "does"]),
    ("am/is/are", &["am", "is", "are"]),
    ("was/were", &["was", "were"]),
    ("have/has", &["have", "has"]),
];

/// Tokens that belong to formula notation rather than to a sentence.
const FORMULA_VOCABULARY: &[&str] = &[
    "s", "v", "vs", "ves", "es", "v2", "v3", "ved", "v-ed", "ving", "v-ing", "not", "do", "does",
    "did", "am", "is", "are", "was", "were", "have", "has", "had", "will", "shall", "won", "t",
    "be", "been",
];

/// Words that can fill the subject slot but never a verb slot.
const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

static V_S_ES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bv(?:s|es)\b").expect("valid regex"));

static V_DASH_ING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bv-?ing\b").expect("valid regex"));

static S_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bs\b").expect("valid regex"));

/// Substrings that count as a bare `V` in notation.
const BARE_V_TAGS: [&str; 6] = [" v", "v ", "v-", "v2", "ved", "v3"];

/// [`formula_ok_with`] against the built-in irregular verb table.
pub fn formula_ok(user_input: &str, canonical: &str) -> bool {
    formula_ok_with(user_input, canonical, Lexicon::builtin())
}

/// True iff `user_input` carries every required element of `canonical`.
pub fn formula_ok_with(user_input: &str, canonical: &str, lexicon: &Lexicon) -> bool {
    let u = normalize(user_input);
    if u.is_empty() {
        tracing::trace!("formula input is empty");
        return false;
    }
    let c = normalize(canonical);
    let c_raw = canonical.to_lowercase();
    let content = content_words(&u);
    let has_verb_word = content.iter().any(|w| !PRONOUNS.contains(w));

    for (tag, words) in CHOICE_GROUPS {
        if c_raw.contains(tag) && !contains_any_word(&u, words) {
            tracing::trace!(tag, "formula missing auxiliary group");
            return false;
        }
    }

    if format!(" {c_raw} ").contains(" not ") && !contains_word(&u, "not") {
        tracing::trace!("formula missing negation");
        return false;
    }
    if S_TOKEN.is_match(&c) && !(contains_word(&u, "s") || !content.is_empty()) {
        tracing::trace!("formula missing subject");
        return false;
    }

    if c_raw.contains("v(s/es)")
        && !(contains_word(&u, "v") || V_S_ES.is_match(&u) || has_verb_word)
    {
        return false;
    }
    if c_raw.contains("v-ing")
        && !(contains_word(&u, "ving")
            || V_DASH_ING.is_match(&u)
            || content.iter().any(|w| V_ING.is_match(w)))
    {
        return false;
    }
    if c_raw.contains("v2/v-ed")
        && !(contains_any_word(&u, &["v2", "ved", "v-ed"])
            || content
                .iter()
                .any(|w| V_ED.is_match(w) || lexicon.is_past_form(w)))
    {
        return false;
    }
    if c_raw.contains("v3")
        && !(contains_word(&u, "v3")
            || content
                .iter()
                .any(|w| V3_SUFFIX.is_match(w) || lexicon.is_participle(w)))
    {
        return false;
    }

    // A bare infinitive slot, as in "will + V".
    if format!(" {c} ").contains(" v ")
        && !(BARE_V_TAGS.iter().any(|tag| u.contains(tag)) || has_verb_word)
    {
        tracing::trace!("formula missing verb slot");
        return false;
    }

    true
}

/// Tokens of normalized `text` that are real words rather than notation.
fn content_words(text: &str) -> Vec<&str> {
    text.split(' ')
        .filter(|tok| tok.chars().any(char::is_alphanumeric))
        .filter(|tok| !FORMULA_VOCABULARY.contains(tok))
        .collect()
}
