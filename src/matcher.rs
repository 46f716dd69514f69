//! Keyword and pattern primitives shared by the validators.

use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize;

/// A whole token ending in `-ing` ("working", but also "thing").
pub(crate) static V_ING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+ing\b").expect("valid regex"));

/// A whole token ending in `-ed`.
pub(crate) static V_ED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+ed\b").expect("valid regex"));

/// Rough past-participle shape: `-ed`, `-en` or `-wn`.
pub(crate) static V3_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+(?:ed|en|wn)\b").expect("valid regex"));

/// Word characters as far as token boundaries are concerned.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokens of `text`, split on anything that is not a word character.
pub(crate) fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c)).filter(|tok| !tok.is_empty())
}

// Same rule as regex `\b`: word-ness differs on the two sides of `idx`.
fn is_boundary(text: &str, idx: usize) -> bool {
    let before = text[..idx].chars().next_back().is_some_and(is_word_char);
    let after = text[idx..].chars().next().is_some_and(is_word_char);
    before != after
}

/// True iff `word` occurs in `text` as a whole token.
///
/// Boundaries follow regex `\b`, so `v` is found in `"v-ing"` but not in
/// `"verb"`.
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    text.char_indices().any(|(i, _)| {
        text[i..].starts_with(word) && is_boundary(text, i) && is_boundary(text, i + word.len())
    })
}

/// True iff any of `words` occurs in `text` as a whole token.
pub fn contains_any_word(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| contains_word(text, w))
}

/// Normalizes `text`, then reports whether any pattern matches anywhere.
pub fn any_pattern_matches(text: &str, patterns: &[&Regex]) -> bool {
    let t = normalize(text);
    patterns.iter().any(|p| p.is_match(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_word_respects_boundaries() {
        assert!(contains_word("she has gone", "has"));
        assert!(!contains_word("she hasty", "has"));
        assert!(contains_word("s v-ing", "v"));
        assert!(!contains_word("verb", "v"));
        assert!(contains_word("s v-ed", "v-ed"));
        assert!(!contains_word("anything", ""));
        assert!(contains_word("has", "has"));
        assert!(contains_word("v3 / v2", "v2"));
        assert!(!contains_word("v22", "v2"));
        assert!(!contains_word("s ving", "v"));
    }

    #[test]
    fn test_word_tokens_split_on_non_word_characters() {
        let tokens: Vec<_> = word_tokens("have you gone-away / v2").collect();
        assert_eq!(tokens, vec!["have", "you", "gone", "away", "v2"]);
        assert_eq!(word_tokens(" - / ").count(), 0);
    }

    #[test]
    fn test_contains_any_word() {
        assert!(contains_any_word("s am / is / are", &["am", "is", "are"]));
        assert!(contains_any_word("they are", &["am", "is", "are"]));
        assert!(!contains_any_word("they were", &["am", "is", "are"]));
    }

    #[test]
    fn test_any_pattern_matches_normalizes_first() {
        let not = Regex::new(r"\bdo not\b").unwrap();
        let dont = Regex::new(r"\bdon ?t\b").unwrap();
        assert!(any_pattern_matches("I DON'T know", &[&not, &dont]));
        assert!(any_pattern_matches("I do  NOT know", &[&dont, &not]));
        assert!(!any_pattern_matches("I know", &[&not, &dont]));
        assert!(!any_pattern_matches("I know", &[]));
    }

    #[test]
    fn test_verb_form_shapes() {
        assert!(V_ING.is_match("she is working"));
        assert!(!V_ING.is_match("s v-ing"));
        assert!(V_ED.is_match("we walked home"));
        assert!(V3_SUFFIX.is_match("it was written"));
        assert!(V3_SUFFIX.is_match("they have flown"));
        assert!(!V3_SUFFIX.is_match("they have gone"));
    }
}
