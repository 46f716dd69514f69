use serde::{Deserialize, Serialize};

/// Outcome of checking one answer: right or wrong, plus a hint to show when
/// it is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub ok: bool,
    pub hint: String,
}

impl Verdict {
    pub fn new(ok: bool, hint: impl Into<String>) -> Self {
        Self {
            ok,
            hint: hint.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// The hint, only when the answer was rejected.
    pub fn failure_hint(&self) -> Option<&str> {
        (!self.ok).then_some(self.hint.as_str())
    }
}

impl From<Verdict> for (bool, String) {
    fn from(v: Verdict) -> Self {
        (v.ok, v.hint)
    }
}
