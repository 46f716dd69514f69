use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::{DrillError, Result};
use crate::matcher::{V3_SUFFIX, V_ED, word_tokens};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct IrregularVerb {
    pub base: String,
    /// May list alternatives, e.g. `was/were`.
    pub past: String,
    pub participle: String,
}

/// Irregular past-simple and past-participle forms.
///
/// Suffix detection (`-ed`, `-en`, `-wn`) is the primary signal for past and
/// participle forms; this table recovers the ones it misses (`went`, `seen`,
/// `been`).
#[derive(Debug, Clone)]
pub struct Lexicon {
    verbs: Vec<IrregularVerb>,
    past_forms: HashSet<String>,
    participles: HashSet<String>,
}

static BUILTIN: LazyLock<Lexicon> = LazyLock::new(|| {
    Lexicon::new().expect("embedded irregular verb table is valid")
});

impl Lexicon {
    /// Builds the lexicon from the embedded irregular verb table.
    pub fn new() -> Result<Self> {
        Self::from_entries(data::load_irregular_verbs()?)
    }

    /// Process-wide copy of the embedded table.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn from_entries(verbs: Vec<IrregularVerb>) -> Result<Self> {
        let mut bases = HashSet::new();
        for verb in &verbs {
            let base = verb.base.trim();
            if base.is_empty() {
                return Err(DrillError::InvalidLexicon("empty base form".to_string()));
            }
            if !bases.insert(base.to_lowercase()) {
                tracing::warn!(base, "duplicate irregular verb");
                return Err(DrillError::InvalidLexicon(format!("duplicate base form {base:?}")));
            }
        }

        let past_forms = Lexicon::grow_forms(verbs.iter().map(|v| v.past.as_str()));
        let participles = Lexicon::grow_forms(verbs.iter().map(|v| v.participle.as_str()));
        if past_forms.is_empty() || participles.is_empty() {
            return Err(DrillError::InvalidLexicon("no verb forms".to_string()));
        }

        tracing::trace!(
            verbs = verbs.len(),
            past_forms = past_forms.len(),
            participles = participles.len(),
            "irregular verb table loaded"
        );
        Ok(Self {
            verbs,
            past_forms,
            participles,
        })
    }

    // "was/were" contributes both "was" and "were".
    fn grow_forms<'a>(cells: impl Iterator<Item = &'a str>) -> HashSet<String> {
        cells
            .flat_map(|cell| cell.split('/'))
            .map(|form| form.trim().to_lowercase())
            .filter(|form| !form.is_empty())
            .collect()
    }

    pub fn verbs(&self) -> &[IrregularVerb] {
        &self.verbs
    }

    pub fn is_past_form(&self, token: &str) -> bool {
        self.past_forms.contains(token)
    }

    pub fn is_participle(&self, token: &str) -> bool {
        self.participles.contains(token)
    }

    /// Any `-ed` token or irregular past form in normalized `text`.
    pub fn has_past_form(&self, text: &str) -> bool {
        V_ED.is_match(text) || word_tokens(text).any(|tok| self.is_past_form(tok))
    }

    /// Any participle-shaped token, irregular participle, or `been` in
    /// normalized `text`.
    pub fn has_participle(&self, text: &str) -> bool {
        V3_SUFFIX.is_match(text)
            || word_tokens(text).any(|tok| self.is_participle(tok))
            || text.contains("been")
    }
}
