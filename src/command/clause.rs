//! Predicate clauses entered by the user.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which predicate a clause restricts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseKind {
    Sample,
    Variant,
}

impl ClauseKind {
    pub const ALL: [ClauseKind; 2] = [ClauseKind::Sample, ClauseKind::Variant];

    /// Label sent as `query_type` to the suggestion endpoint.
    pub fn label(self) -> &'static str {
        match self {
            ClauseKind::Sample => "Sample",
            ClauseKind::Variant => "Variant",
        }
    }
}

impl fmt::Display for ClauseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One predicate entry: a checkbox and a free-text body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub enabled: bool,
    pub raw_text: String,
}

impl Clause {
    pub fn new(enabled: bool, raw_text: impl Into<String>) -> Self {
        Self {
            enabled,
            raw_text: raw_text.into(),
        }
    }

    pub fn enabled(raw_text: impl Into<String>) -> Self {
        Self::new(true, raw_text)
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// A clause contributes only when enabled and non-blank.
    pub fn contributes(&self) -> bool {
        self.enabled && !self.raw_text.trim().is_empty()
    }

    /// True when the user wrote their own format flag.
    pub fn is_preformatted(&self, marker: &str) -> bool {
        !marker.is_empty() && self.raw_text.contains(marker)
    }
}
