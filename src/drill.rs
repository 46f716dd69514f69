use std::collections::HashSet;

use crate::data;
use crate::error::{DrillError, Result};
use crate::example;
use crate::formula;
use crate::lexicon::Lexicon;
use crate::tense::{Form, Group, Tense, TenseKey};
use crate::usage;
use crate::verdict::Verdict;

/// The drill engine: the tense content table, the irregular verb table and
/// the answer checkers that read them.
///
/// Everything is immutable after construction, so one `Drill` can serve any
/// number of learners at once.
pub struct Drill {
    tenses: Vec<Tense>,
    lexicon: Lexicon,
}

impl Drill {
    /// Uses the embedded 12-tense table and irregular verb table.
    pub fn new() -> Result<Self> {
        Self::with_tenses(data::load_tenses()?, Lexicon::new()?)
    }

    /// Uses a caller-supplied tense table in the same JSON shape as the
    /// embedded one.
    pub fn from_json(tenses_json: &str) -> Result<Self> {
        Self::with_tenses(data::parse_tenses(tenses_json)?, Lexicon::new()?)
    }

    pub fn with_tenses(tenses: Vec<Tense>, lexicon: Lexicon) -> Result<Self> {
        let mut seen = HashSet::new();
        for tense in &tenses {
            if !seen.insert(tense.key) {
                return Err(DrillError::DuplicateTense(tense.key));
            }
        }
        tracing::debug!(tenses = tenses.len(), "drill ready");
        Ok(Self { tenses, lexicon })
    }

    pub fn tenses(&self) -> &[Tense] {
        &self.tenses
    }

    pub fn tense(&self, key: TenseKey) -> Result<&Tense> {
        self.tenses
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| DrillError::UnknownTense(key.to_string()))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The hint on failure is the canonical formula itself.
    pub fn check_formula(
        &self,
        key: TenseKey,
        group: Group,
        form: Form,
        input: &str,
    ) -> Result<Verdict> {
        let canonical = self
            .tense(key)?
            .formula(group, form)
            .ok_or(DrillError::UnsupportedCombination {
                tense: key,
                group,
                form,
            })?;
        let ok = formula::formula_ok_with(input, canonical, &self.lexicon);
        tracing::debug!(tense = %key, %group, %form, ok, "formula checked");
        Ok(Verdict::new(ok, canonical))
    }

    /// Lenient policy: one shared keyword with any of the tense's usages.
    pub fn check_usage(&self, key: TenseKey, input: &str) -> Result<Verdict> {
        let tense = self.tense(key)?;
        let ok = usage::usage_ok(input, &tense.uses);
        tracing::debug!(tense = %key, ok, "usage checked");
        Ok(Verdict::new(ok, tense.uses.first().cloned().unwrap_or_default()))
    }

    /// Strict policy against a single usage: either text contains the other.
    pub fn check_usage_item(&self, key: TenseKey, index: usize, input: &str) -> Result<Verdict> {
        let tense = self.tense(key)?;
        let canonical = item(key, "usage", &tense.uses, index)?;
        let ok = usage::usage_item_ok(input, canonical);
        tracing::debug!(tense = %key, index, ok, "usage item checked");
        Ok(Verdict::new(ok, canonical))
    }

    pub fn check_signal(&self, key: TenseKey, index: usize, input: &str) -> Result<Verdict> {
        let tense = self.tense(key)?;
        let canonical = item(key, "signal", &tense.signals, index)?;
        let ok = usage::signal_ok(input, canonical);
        tracing::debug!(tense = %key, index, ok, "signal checked");
        Ok(Verdict::new(ok, canonical))
    }

    /// Checks an example sentence. The group must be one the tense defines.
    pub fn check_example(
        &self,
        key: TenseKey,
        group: Group,
        form: Form,
        sentence: &str,
    ) -> Result<Verdict> {
        if !self.tense(key)?.groups().any(|g| g == group) {
            return Err(DrillError::UnsupportedCombination {
                tense: key,
                group,
                form,
            });
        }
        let verdict = example::check_example(&self.lexicon, key, group, form, sentence)?;
        tracing::debug!(tense = %key, %group, %form, ok = verdict.ok, "example checked");
        Ok(verdict)
    }

    /// String-keyed [`Drill::check_example`].
    pub fn validate_example(
        &self,
        tense_key: &str,
        group: &str,
        form: &str,
        sentence: &str,
    ) -> Result<Verdict> {
        self.check_example(tense_key.parse()?, group.parse()?, form.parse()?, sentence)
    }
}

fn item<'t>(
    tense: TenseKey,
    kind: &'static str,
    items: &'t [String],
    index: usize,
) -> Result<&'t str> {
    items
        .get(index)
        .map(String::as_str)
        .ok_or(DrillError::IndexOutOfRange {
            tense,
            kind,
            index,
            len: items.len(),
        })
}
