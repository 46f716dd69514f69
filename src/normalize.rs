//! Canonical form for learner input.
//!
//! Everything the validators compare goes through [`normalize`] first, so a
//! formula typed as `"S+Am/Is/Are(not)"` and one typed as `"s am / is / are not"`
//! look the same to them.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static PARENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[()]").expect("valid regex"));

static SLASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*/\s*").expect("valid regex"));

/// Anything that is not a word character, whitespace, `/` or `-`.
static PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s/\-]").expect("valid regex"));

static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize text for lenient comparison.
///
/// NFC, lowercase, NFC again (lowercasing can leave a base letter next to a
/// combining mark that now composes), `+` and parentheses become spaces,
/// every `/` gets exactly one space on each side, remaining punctuation is
/// dropped and whitespace is collapsed. Apostrophes are punctuation too, so
/// `don't` becomes `don t`.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let s: String = text.nfc().collect::<String>().to_lowercase().nfc().collect();
    let s = s.trim().replace('+', " ");
    let s = PARENS.replace_all(&s, " ");
    let s = SLASH.replace_all(&s, " / ");
    let s = PUNCT.replace_all(&s, " ");
    SPACES.replace_all(&s, " ").trim().to_string()
}

/// Same as [`normalize`], treating a missing value as empty input.
pub fn normalize_opt(text: Option<&str>) -> String {
    normalize(text.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternatives_are_spaced() {
        assert_eq!(normalize("Am/Is/Are"), "am / is / are");
        assert_eq!(normalize("am / is / are"), "am / is / are");
        assert_eq!(normalize("am  /is/   are"), "am / is / are");
    }

    #[test]
    fn test_plus_and_parentheses() {
        assert_eq!(normalize("S + V(s/es)"), "s v s / es");
        assert_eq!(normalize("S+will not (won't)+V"), "s will not won t v");
    }

    #[test]
    fn test_punctuation_dropped_but_hyphen_kept() {
        assert_eq!(normalize("Will + S + be + V-ing ?"), "will s be v-ing");
        assert_eq!(normalize("  I haven't   seen it!  "), "i haven t seen it");
        assert_eq!(normalize("She doesn’t know."), "she doesn t know");
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n"), "");
        assert_eq!(normalize("?!."), "");
        assert_eq!(normalize_opt(None), "");
    }

    #[test]
    fn test_unicode_is_composed_and_lowercased() {
        // "e" + combining circumflex + combining dot below composes to "ệ"
        let decomposed = "Hi\u{0065}\u{0302}\u{0323}n";
        assert_eq!(normalize(decomposed), "hi\u{1ec7}n");
        assert_eq!(normalize("THÓI QUEN"), "thói quen");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "S + do/does not + V",
            "Have/Has + S + been + V-ing ?",
            "a/",
            "/ / /",
            "(Habits, general truths)",
            "Diễn tả thói quen, sự thật hiển nhiên",
            "won't -- can't",
            "T\u{308}",
            "\u{3aa}\u{301}",
            "\u{3ab}\u{301}",
            "\u{1fbc}\u{301}",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_lowercasing_recomposes() {
        // uppercase T + diaeresis has no composed form, lowercase t does
        assert_eq!(normalize("T\u{308}"), "\u{1e97}");
        assert_eq!(normalize("\u{3aa}\u{301}"), "\u{390}");
    }

    #[test]
    fn test_idempotent_with_combining_marks() {
        const MARKS: [&str; 4] = ["", "\u{301}", "\u{308}", "\u{323}\u{302}"];
        for cp in 0..0x2200 {
            let Some(c) = char::from_u32(cp) else { continue };
            for mark in MARKS {
                let sample = format!("{c}{mark}");
                let once = normalize(&sample);
                assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
            }
        }
    }
}
