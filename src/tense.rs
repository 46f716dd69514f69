use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DrillError;

/// One of the 12 English tenses, keyed the way the content table names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TenseKey {
    PresentSimple,
    PresentContinuous,
    PresentPerfect,
    PresentPerfectContinuous,
    PastSimple,
    PastContinuous,
    PastPerfect,
    PastPerfectContinuous,
    FutureSimple,
    FutureContinuous,
    FuturePerfect,
    FuturePerfectContinuous,
}

impl TenseKey {
    pub const ALL: [TenseKey; 12] = [
        TenseKey::PresentSimple,
        TenseKey::PresentContinuous,
        TenseKey::PresentPerfect,
        TenseKey::PresentPerfectContinuous,
        TenseKey::PastSimple,
        TenseKey::PastContinuous,
        TenseKey::PastPerfect,
        TenseKey::PastPerfectContinuous,
        TenseKey::FutureSimple,
        TenseKey::FutureContinuous,
        TenseKey::FuturePerfect,
        TenseKey::FuturePerfectContinuous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TenseKey::PresentSimple => "present_simple",
            TenseKey::PresentContinuous => "present_continuous",
            TenseKey::PresentPerfect => "present_perfect",
            TenseKey::PresentPerfectContinuous => "present_perfect_continuous",
            TenseKey::PastSimple => "past_simple",
            TenseKey::PastContinuous => "past_continuous",
            TenseKey::PastPerfect => "past_perfect",
            TenseKey::PastPerfectContinuous => "past_perfect_continuous",
            TenseKey::FutureSimple => "future_simple",
            TenseKey::FutureContinuous => "future_continuous",
            TenseKey::FuturePerfect => "future_perfect",
            TenseKey::FuturePerfectContinuous => "future_perfect_continuous",
        }
    }

    /// Only the simple present and simple past have a separate "to be" pattern.
    pub fn has_to_be_group(&self) -> bool {
        matches!(self, TenseKey::PresentSimple | TenseKey::PastSimple)
    }

    pub fn groups(&self) -> &'static [Group] {
        if self.has_to_be_group() {
            &[Group::Verb, Group::ToBe]
        } else {
            &[Group::Verb]
        }
    }
}

impl fmt::Display for TenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenseKey {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '-'], "_");
        TenseKey::ALL
            .into_iter()
            .find(|key| key.as_str() == wanted)
            .ok_or_else(|| DrillError::UnknownTense(s.to_string()))
    }
}

/// Main verb or the copula "to be".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Group {
    #[serde(rename = "verb")]
    Verb,
    #[serde(rename = "tobe")]
    ToBe,
}

impl Group {
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Verb => "verb",
            Group::ToBe => "tobe",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "verb" => Ok(Group::Verb),
            "tobe" | "to be" | "to_be" => Ok(Group::ToBe),
            _ => Err(DrillError::UnknownGroup(s.to_string())),
        }
    }
}

/// Sentence polarity / mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Form {
    Affirmative,
    Negative,
    Interrogative,
}

impl Form {
    pub const ALL: [Form; 3] = [Form::Affirmative, Form::Negative, Form::Interrogative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Form::Affirmative => "Affirmative",
            Form::Negative => "Negative",
            Form::Interrogative => "Interrogative",
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Form {
    type Err = DrillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "affirmative" => Ok(Form::Affirmative),
            "negative" => Ok(Form::Negative),
            "interrogative" => Ok(Form::Interrogative),
            _ => Err(DrillError::UnknownForm(s.to_string())),
        }
    }
}

/// One row of the tense content table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tense {
    pub key: TenseKey,
    pub name: String,
    #[serde(default)]
    pub native_name: Option<String>,
    /// group -> form -> canonical formula
    pub summary: BTreeMap<Group, BTreeMap<Form, String>>,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub signals: Vec<String>,
}

impl Tense {
    pub fn formula(&self, group: Group, form: Form) -> Option<&str> {
        self.summary
            .get(&group)
            .and_then(|forms| forms.get(&form))
            .map(String::as_str)
    }

    pub fn groups(&self) -> impl Iterator<Item = Group> + '_ {
        self.summary.keys().copied()
    }
}
