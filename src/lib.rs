pub mod error;
pub mod tense;
pub mod verdict;
pub mod normalize;
pub mod matcher;
pub mod lexicon;
pub mod data;
pub mod formula;
pub mod usage;
pub mod example;
pub mod drill;

pub use drill::Drill;
pub use error::{DrillError, Result};
pub use example::validate_example;
pub use formula::{formula_ok, formula_ok_with};
pub use lexicon::Lexicon;
pub use matcher::{any_pattern_matches, contains_any_word, contains_word};
pub use normalize::normalize;
pub use tense::{Form, Group, Tense, TenseKey};
pub use usage::{signal_ok, usage_item_ok, usage_ok};
pub use verdict::Verdict;
