//! Example-sentence rules.
//!
//! Every `(tense, group, form)` cell is an independent predicate over the
//! normalized sentence plus a fixed hint. The predicates look for the
//! grammatical signature of the cell (auxiliaries, `not` or a contraction,
//! `-ing` / past / participle forms, and for questions the auxiliary in
//! first position). They check presence, not grammar: "I am eat thing" passes
//! as present continuous because `am` and a `-ing` token are both there.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DrillError, Result};
use crate::lexicon::Lexicon;
use crate::matcher::{V_ING, any_pattern_matches};
use crate::normalize::normalize;
use crate::tense::{Form, Group, TenseKey};
use crate::verdict::Verdict;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($re).expect("valid regex"));
    };
}

pattern!(BE_NOW, r"\b(?:am|is|are)\b");
pattern!(BE_PAST, r"\b(?:was|were)\b");
pattern!(DID, r"\bdid\b");
pattern!(HAVE_NOW, r"\b(?:have|has)\b");
pattern!(HAD, r"\bhad\b");
pattern!(WILL, r"\b(?:will|shall)\b");

// Normalization turns "don't" into "don t"; "dont" is accepted as well.
pattern!(DO_NOT, r"\b(?:do not|does not|don ?t|doesn ?t)\b");
pattern!(BE_NOW_NOT, r"\b(?:am not|is not|are not|isn ?t|aren ?t)\b");
pattern!(HAVE_NOT, r"\b(?:have not|has not|haven ?t|hasn ?t)\b");
pattern!(HAVE_NOT_BEEN, r"\b(?:have not|has not|haven ?t|hasn ?t) been\b");
pattern!(DID_NOT, r"\b(?:did not|didn ?t)\b");
pattern!(BE_PAST_NOT, r"\b(?:was not|were not|wasn ?t|weren ?t)\b");
pattern!(HAD_NOT, r"\b(?:had not|hadn ?t)\b");
pattern!(HAD_NOT_BEEN, r"\b(?:had not|hadn ?t) been\b");
pattern!(WILL_NOT, r"\b(?:will not|won ?t)\b");
pattern!(WILL_NOT_BE, r"\b(?:will not|won ?t) be\b");
pattern!(WILL_NOT_HAVE, r"\b(?:will not|won ?t) have\b");
pattern!(WILL_NOT_HAVE_BEEN, r"\b(?:will not|won ?t) have been\b");

// Question leads are anchored to the first token. The lazy `.*?` stops at the
// earliest following marker so the rest of the sentence stays searchable.
pattern!(STARTS_DO, r"^(?:do|does)\b");
pattern!(STARTS_BE_NOW, r"^(?:am|is|are)\b");
pattern!(STARTS_HAVE, r"^(?:have|has)\b");
pattern!(STARTS_HAVE_BEEN, r"^(?:have|has)\b.*?\bbeen\b");
pattern!(STARTS_DID, r"^did\b");
pattern!(STARTS_BE_PAST, r"^(?:was|were)\b");
pattern!(STARTS_HAD, r"^had\b");
pattern!(STARTS_HAD_BEEN, r"^had\b.*?\bbeen\b");
pattern!(STARTS_WILL, r"^(?:will|shall)\b");
pattern!(STARTS_WILL_BE, r"^(?:will|shall)\b.*?\bbe\b");
pattern!(STARTS_WILL_HAVE, r"^(?:will|shall)\b.*?\bhave\b");
pattern!(STARTS_WILL_HAVE_BEEN, r"^(?:will|shall)\b.*?\bhave been\b");

/// A normalized example sentence and the verb table used to read it.
pub struct Sentence<'a> {
    text: String,
    lexicon: &'a Lexicon,
}

impl<'a> Sentence<'a> {
    pub fn new(raw: &str, lexicon: &'a Lexicon) -> Self {
        Self {
            text: normalize(raw),
            lexicon,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn has(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.text)
    }

    fn has_any(&self, patterns: &[&Regex]) -> bool {
        any_pattern_matches(&self.text, patterns)
    }

    fn contains(&self, phrase: &str) -> bool {
        self.text.contains(phrase)
    }

    fn ing(&self) -> bool {
        V_ING.is_match(&self.text)
    }

    fn past_form(&self) -> bool {
        self.lexicon.has_past_form(&self.text)
    }

    fn participle(&self) -> bool {
        self.lexicon.has_participle(&self.text)
    }

    /// Text after the first match of `lead`.
    fn after(&self, lead: &Regex) -> Option<&str> {
        lead.find(&self.text).map(|m| &self.text[m.end()..])
    }

    /// `lead` followed somewhere later by a `-ing` token.
    fn then_ing(&self, lead: &Regex) -> bool {
        self.after(lead).is_some_and(|rest| V_ING.is_match(rest))
    }

    /// `lead` followed somewhere later by a participle.
    fn then_participle(&self, lead: &Regex) -> bool {
        self.after(lead)
            .is_some_and(|rest| self.lexicon.has_participle(rest))
    }
}

type Check = fn(&Sentence<'_>) -> bool;

/// Predicate plus the hint shown when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    check: Check,
    pub hint: &'static str,
}

impl Rule {
    pub fn matches(&self, sentence: &Sentence<'_>) -> bool {
        (self.check)(sentence)
    }
}

pub type Cell = (TenseKey, Group, Form);

static RULES: LazyLock<HashMap<Cell, Rule>> = LazyLock::new(build_rules);

/// Every cell the example checker knows about.
pub fn rules() -> &'static HashMap<Cell, Rule> {
    &RULES
}

pub fn rule(tense: TenseKey, group: Group, form: Form) -> Result<&'static Rule> {
    RULES
        .get(&(tense, group, form))
        .ok_or(DrillError::UnsupportedCombination { tense, group, form })
}

/// Checks an example sentence against the rule for its cell.
///
/// An empty sentence is a negative verdict. A cell with no rule (for instance
/// the "to be" group of a tense that has none) is an error.
pub fn check_example(
    lexicon: &Lexicon,
    tense: TenseKey,
    group: Group,
    form: Form,
    sentence: &str,
) -> Result<Verdict> {
    let rule = rule(tense, group, form)?;
    let sentence = Sentence::new(sentence, lexicon);
    let ok = !sentence.text().is_empty() && rule.matches(&sentence);
    tracing::trace!(%tense, %group, %form, text = sentence.text(), ok, "example checked");
    Ok(Verdict::new(ok, rule.hint))
}

/// String-keyed [`check_example`] against the built-in verb table.
pub fn validate_example(
    tense_key: &str,
    group: &str,
    form: &str,
    sentence: &str,
) -> Result<Verdict> {
    check_example(
        Lexicon::builtin(),
        tense_key.parse()?,
        group.parse()?,
        form.parse()?,
        sentence,
    )
}

fn build_rules() -> HashMap<Cell, Rule> {
    use Form::{Affirmative as Aff, Interrogative as Int, Negative as Neg};
    use Group::{ToBe, Verb};
    use TenseKey::*;

    let cells: [(Cell, Check, &'static str); 42] = [
        // present simple
        (
            (PresentSimple, Verb, Aff),
            |s| !s.has_any(&[&*WILL, &*HAVE_NOW, &*HAD, &*BE_PAST, &*BE_NOW, &*DID]) && !s.ing(),
            "Avoid auxiliaries; use V / V(s/es).",
        ),
        ((PresentSimple, Verb, Neg), |s| s.has(&DO_NOT), "Use do/does not + V."),
        ((PresentSimple, Verb, Int), |s| s.has(&STARTS_DO), "Start with Do/Does + S + V?"),
        ((PresentSimple, ToBe, Aff), |s| s.has(&BE_NOW), "Use am/is/are."),
        ((PresentSimple, ToBe, Neg), |s| s.has(&BE_NOW_NOT), "Use am/is/are + not."),
        ((PresentSimple, ToBe, Int), |s| s.has(&STARTS_BE_NOW), "Start with Am/Is/Are + S?"),
        // present continuous
        (
            (PresentContinuous, Verb, Aff),
            |s| s.has(&BE_NOW) && s.ing(),
            "am/is/are + V-ing.",
        ),
        (
            (PresentContinuous, Verb, Neg),
            |s| s.then_ing(&BE_NOW_NOT),
            "am/is/are + not + V-ing.",
        ),
        (
            (PresentContinuous, Verb, Int),
            |s| s.then_ing(&STARTS_BE_NOW),
            "Start with Am/Is/Are + S + V-ing?",
        ),
        // present perfect
        (
            (PresentPerfect, Verb, Aff),
            |s| s.has(&HAVE_NOW) && s.participle(),
            "have/has + V3.",
        ),
        (
            (PresentPerfect, Verb, Neg),
            |s| s.then_participle(&HAVE_NOT),
            "have/has + not + V3.",
        ),
        (
            (PresentPerfect, Verb, Int),
            |s| s.then_participle(&STARTS_HAVE),
            "Start with Have/Has + S + V3?",
        ),
        // present perfect continuous
        (
            (PresentPerfectContinuous, Verb, Aff),
            |s| s.has(&HAVE_NOW) && s.contains("been") && s.ing(),
            "have/has been + V-ing.",
        ),
        (
            (PresentPerfectContinuous, Verb, Neg),
            |s| s.then_ing(&HAVE_NOT_BEEN),
            "have/has + not + been + V-ing.",
        ),
        (
            (PresentPerfectContinuous, Verb, Int),
            |s| s.then_ing(&STARTS_HAVE_BEEN),
            "Start with Have/Has + S + been + V-ing?",
        ),
        // past simple
        ((PastSimple, Verb, Aff), |s| s.past_form(), "Use V2 / V-ed."),
        (
            (PastSimple, Verb, Neg),
            |s| s.has(&DID_NOT) && !s.past_form(),
            "did not + V (bare infinitive).",
        ),
        ((PastSimple, Verb, Int), |s| s.has(&STARTS_DID), "Start with Did + S + V?"),
        ((PastSimple, ToBe, Aff), |s| s.has(&BE_PAST), "Use was/were."),
        ((PastSimple, ToBe, Neg), |s| s.has(&BE_PAST_NOT), "was/were + not."),
        ((PastSimple, ToBe, Int), |s| s.has(&STARTS_BE_PAST), "Start with Was/Were + S?"),
        // past continuous
        (
            (PastContinuous, Verb, Aff),
            |s| s.has(&BE_PAST) && s.ing(),
            "was/were + V-ing.",
        ),
        (
            (PastContinuous, Verb, Neg),
            |s| s.then_ing(&BE_PAST_NOT),
            "was/were + not + V-ing.",
        ),
        (
            (PastContinuous, Verb, Int),
            |s| s.then_ing(&STARTS_BE_PAST),
            "Start with Was/Were + S + V-ing?",
        ),
        // past perfect
        ((PastPerfect, Verb, Aff), |s| s.has(&HAD) && s.participle(), "had + V3."),
        ((PastPerfect, Verb, Neg), |s| s.then_participle(&HAD_NOT), "had not + V3."),
        (
            (PastPerfect, Verb, Int),
            |s| s.then_participle(&STARTS_HAD),
            "Start with Had + S + V3?",
        ),
        // past perfect continuous
        (
            (PastPerfectContinuous, Verb, Aff),
            |s| s.has(&HAD) && s.contains("been") && s.ing(),
            "had been + V-ing.",
        ),
        (
            (PastPerfectContinuous, Verb, Neg),
            |s| s.then_ing(&HAD_NOT_BEEN),
            "had not been + V-ing.",
        ),
        (
            (PastPerfectContinuous, Verb, Int),
            |s| s.then_ing(&STARTS_HAD_BEEN),
            "Start with Had + S + been + V-ing?",
        ),
        // future simple
        (
            (FutureSimple, Verb, Aff),
            |s| s.has(&WILL) && !s.contains("will have") && !s.contains("will be"),
            "will + V (bare infinitive).",
        ),
        ((FutureSimple, Verb, Neg), |s| s.has(&WILL_NOT), "will not + V."),
        (
            (FutureSimple, Verb, Int),
            |s| s.has(&STARTS_WILL),
            "Start with Will/Shall + S + V?",
        ),
        // future continuous
        (
            (FutureContinuous, Verb, Aff),
            |s| s.contains("will be") && s.ing(),
            "will be + V-ing.",
        ),
        (
            (FutureContinuous, Verb, Neg),
            |s| s.then_ing(&WILL_NOT_BE),
            "will not be + V-ing.",
        ),
        (
            (FutureContinuous, Verb, Int),
            |s| s.then_ing(&STARTS_WILL_BE),
            "Start with Will + S + be + V-ing?",
        ),
        // future perfect
        (
            (FuturePerfect, Verb, Aff),
            |s| s.contains("will have") && s.participle(),
            "will have + V3.",
        ),
        (
            (FuturePerfect, Verb, Neg),
            |s| s.then_participle(&WILL_NOT_HAVE),
            "will not have + V3.",
        ),
        (
            (FuturePerfect, Verb, Int),
            |s| s.then_participle(&STARTS_WILL_HAVE),
            "Start with Will + S + have + V3?",
        ),
        // future perfect continuous
        (
            (FuturePerfectContinuous, Verb, Aff),
            |s| s.contains("will have been") && s.ing(),
            "will have been + V-ing.",
        ),
        (
            (FuturePerfectContinuous, Verb, Neg),
            |s| s.then_ing(&WILL_NOT_HAVE_BEEN),
            "will not have been + V-ing.",
        ),
        (
            (FuturePerfectContinuous, Verb, Int),
            |s| s.then_ing(&STARTS_WILL_HAVE_BEEN),
            "Start with Will + S + have been + V-ing?",
        ),
    ];

    cells
        .into_iter()
        .map(|(cell, check, hint)| (cell, Rule { check, hint }))
        .collect()
}
