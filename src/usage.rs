//! Usage-description and signal-word checks.
//!
//! Two independent policies exist for usages. [`usage_ok`] accepts any answer
//! sharing one meaningful word with any canonical usage; [`usage_item_ok`]
//! compares against a single usage and wants one string to contain the other.

use crate::normalize::normalize;

/// Canonical tokens shorter than this many characters are not keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// True iff the normalized input contains at least one keyword of at least
/// one canonical usage.
pub fn usage_ok<S: AsRef<str>>(user_input: &str, canonical_usages: &[S]) -> bool {
    let text = normalize(user_input);
    if text.is_empty() {
        return false;
    }

    canonical_usages.iter().any(|usage| {
        let usage = normalize(usage.as_ref());
        usage
            .split(' ')
            .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
            .any(|keyword| text.contains(keyword))
    })
}

/// True iff either normalized string contains the other. Empty input never
/// passes.
pub fn usage_item_ok(user_input: &str, canonical_usage: &str) -> bool {
    let nu = normalize(user_input);
    let na = normalize(canonical_usage);
    !nu.is_empty() && (na.contains(&nu) || nu.contains(&na))
}

/// Signal words must match exactly after normalization.
pub fn signal_ok(user_input: &str, canonical_signal: &str) -> bool {
    let nu = normalize(user_input);
    !nu.is_empty() && nu == normalize(canonical_signal)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRESENT_SIMPLE_USES: [&str; 2] = [
        "Diễn tả thói quen, sự thật hiển nhiên (Habits, general truths)",
        "Lịch trình, thời gian biểu (Schedules, timetables)",
    ];

    #[test]
    fn test_single_shared_keyword_is_enough() {
        assert!(usage_ok("habits", &PRESENT_SIMPLE_USES[..1]));
        assert!(usage_ok("HABITS!", &PRESENT_SIMPLE_USES));
        assert!(usage_ok("train timetables", &PRESENT_SIMPLE_USES));
        assert!(usage_ok("thói quen", &PRESENT_SIMPLE_USES));
    }

    #[test]
    fn test_short_words_are_not_keywords() {
        // "sự" and "tả" are under three characters
        assert!(!usage_ok("sự tả", &PRESENT_SIMPLE_USES));
        assert!(!usage_ok("an ox", &["to be an ox"]));
    }

    #[test]
    fn test_usage_ok_rejects_unrelated_and_empty() {
        assert!(!usage_ok("predictions", &PRESENT_SIMPLE_USES));
        assert!(!usage_ok("", &PRESENT_SIMPLE_USES));
        assert!(!usage_ok("habits", &[] as &[&str]));
    }

    #[test]
    fn test_usage_ok_accepts_owned_strings() {
        let uses = vec!["Action happening now".to_string()];
        assert!(usage_ok("something happening", &uses));
    }

    #[test]
    fn test_usage_item_is_bidirectional() {
        let canonical = "Sự việc tạm thời (Temporary situations)";
        assert!(usage_item_ok("temporary situations", canonical));
        assert!(usage_item_ok(
            "Sự việc tạm thời (Temporary situations), e.g. living with friends",
            canonical
        ));
        assert!(!usage_item_ok("temporary things", canonical));
        assert!(!usage_item_ok("", canonical));
        assert!(!usage_item_ok("?!", canonical));
    }

    #[test]
    fn test_signal_words_match_after_normalization() {
        assert!(signal_ok("Every Day", "every day"));
        assert!(signal_ok("last night / week / year", "last night/week/year"));
        assert!(signal_ok("when Past Simple", "when + Past Simple"));
        assert!(!signal_ok("everyday", "every day"));
        assert!(!signal_ok("", "every day"));
    }
}
