//! Quoting for clause text.
//!
//! `QuoteRepair` is a heuristic, not a shell-safe escaper: it only balances the
//! outer quotes a user may or may not have typed. `QuotingMode::Shell` switches
//! callers to `shell_quote`, which escapes embedded quotes as well.

use serde::{Deserialize, Serialize};

const QUOTE: char = '\'';

/// How clause bodies are quoted when they are not pre-formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotingMode {
    /// Wrap in single quotes, repairing outer quotes the user already typed.
    #[default]
    Heuristic,
    /// POSIX single-quote escaping of the whole body.
    Shell,
}

/// Where the user's text already carries single quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteRepair {
    /// No leading or trailing quote: add both.
    Bare,
    /// Leading quote only: add the closing one.
    LeadingOnly,
    /// Trailing quote only: add the opening one.
    TrailingOnly,
    /// Both present: leave untouched.
    Enclosed,
}

impl QuoteRepair {
    pub fn classify(text: &str) -> Self {
        match (text.starts_with(QUOTE), text.ends_with(QUOTE)) {
            (false, false) => QuoteRepair::Bare,
            (true, false) => QuoteRepair::LeadingOnly,
            (false, true) => QuoteRepair::TrailingOnly,
            (true, true) => QuoteRepair::Enclosed,
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            QuoteRepair::Bare => format!("{QUOTE}{text}{QUOTE}"),
            QuoteRepair::LeadingOnly => format!("{text}{QUOTE}"),
            QuoteRepair::TrailingOnly => format!("{QUOTE}{text}"),
            QuoteRepair::Enclosed => text.to_string(),
        }
    }
}

/// Balance outer single quotes on `text` so exactly one sits on each side.
pub fn repair_quotes(text: &str) -> String {
    QuoteRepair::classify(text).apply(text)
}

/// Quote `text` as a single POSIX shell word.
///
/// Embedded `'` become `'\''`, so the result cannot terminate the argument early.
pub fn shell_quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(QUOTE);
    for ch in text.chars() {
        if ch == QUOTE {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push(QUOTE);
    quoted
}

/// Drop one enclosing pair of single quotes, if the text has one.
pub(crate) fn strip_enclosing_quotes(text: &str) -> &str {
    if text.len() >= 2 && QuoteRepair::classify(text) == QuoteRepair::Enclosed {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
