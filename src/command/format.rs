//! Default output-format expressions appended to unformatted clauses.

use super::clause::ClauseKind;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SAMPLE_FORMAT: &str = r#"IID + " " + SEX"#;
pub const DEFAULT_VARIANT_FORMAT: &str = r#"CHROM + " " + POS"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatExpression(String);

impl FormatExpression {
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format expressions for `query`; `filter` never appends one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSet {
    pub sample: FormatExpression,
    pub variant: FormatExpression,
}

impl FormatSet {
    pub fn for_kind(&self, kind: ClauseKind) -> &FormatExpression {
        match kind {
            ClauseKind::Sample => &self.sample,
            ClauseKind::Variant => &self.variant,
        }
    }
}
