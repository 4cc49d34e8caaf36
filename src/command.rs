//! Command Builder
//!
//! Turns form state (two optional predicate clauses, a pfile prefix and the target
//! subcommand) into a single `pgen-rs` command line. Everything here is pure; the
//! network clients and front-ends only consume the resulting string.

use serde::{Deserialize, Serialize};
use std::fmt;

mod builder;
mod clause;
mod format;
mod quoting;

pub use builder::CommandBuilder;
pub use clause::{Clause, ClauseKind};
pub use format::{FormatExpression, FormatSet, DEFAULT_SAMPLE_FORMAT, DEFAULT_VARIANT_FORMAT};
pub use quoting::{repair_quotes, shell_quote, QuoteRepair, QuotingMode};

/// External `pgen-rs` subcommand targeted by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subcommand {
    Query,
    Filter,
}

impl Subcommand {
    pub fn as_str(self) -> &'static str {
        match self {
            Subcommand::Query => "query",
            Subcommand::Filter => "filter",
        }
    }
}

impl fmt::Display for Subcommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command assembly settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Executable name placed at the start of every command
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Substring that marks clause text as carrying its own format flag
    #[serde(default = "default_format_marker")]
    pub format_marker: String,

    /// Format appended to sample predicates in `query` mode
    #[serde(default = "default_sample_format")]
    pub sample_format: String,

    /// Format appended to variant predicates in `query` mode
    #[serde(default = "default_variant_format")]
    pub variant_format: String,

    #[serde(default)]
    pub quoting: QuotingMode,
}

fn default_tool() -> String {
    "pgen-rs".to_string()
}

fn default_format_marker() -> String {
    "-f".to_string()
}

fn default_sample_format() -> String {
    DEFAULT_SAMPLE_FORMAT.to_string()
}

fn default_variant_format() -> String {
    DEFAULT_VARIANT_FORMAT.to_string()
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            format_marker: default_format_marker(),
            sample_format: default_sample_format(),
            variant_format: default_variant_format(),
            quoting: QuotingMode::default(),
        }
    }
}

impl CommandConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.tool.trim().is_empty() {
            return Err("Tool name cannot be empty".to_string());
        }
        if self.format_marker.trim().is_empty() {
            return Err("Format marker cannot be empty".to_string());
        }
        Ok(())
    }
}
