//! Crate error type.
//!
//! A wrong answer is never an error: it is a [`Verdict`](crate::Verdict) with
//! `ok == false`. These variants cover requests the engine cannot answer at
//! all and content tables that fail to load.

use thiserror::Error;

use crate::tense::{Form, Group, TenseKey};

#[derive(Debug, Error)]
pub enum DrillError {
    #[error("unknown tense key: {0:?}")]
    UnknownTense(String),

    #[error("unknown group: {0:?} (expected \"verb\" or \"tobe\")")]
    UnknownGroup(String),

    #[error("unknown form: {0:?} (expected Affirmative, Negative or Interrogative)")]
    UnknownForm(String),

    /// No example rule or formula exists for this combination.
    #[error("unsupported combination: {tense} / {group} / {form}")]
    UnsupportedCombination {
        tense: TenseKey,
        group: Group,
        form: Form,
    },

    #[error("{kind} index {index} out of range for {tense} ({len} available)")]
    IndexOutOfRange {
        tense: TenseKey,
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("failed to parse {what}: {source}")]
    Data {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid irregular verb table: {0}")]
    InvalidLexicon(String),

    #[error("tense {0} is defined more than once")]
    DuplicateTense(TenseKey),
}

pub type Result<T> = std::result::Result<T, DrillError>;
