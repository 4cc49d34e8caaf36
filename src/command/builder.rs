//! Assembles `pgen-rs` command lines from clause state.
//!
//! Pure string formatting: no validation of the file prefix, no rejection of empty
//! input. An empty form yields a command with no predicate flags.

use super::clause::{Clause, ClauseKind};
use super::format::{FormatExpression, FormatSet};
use super::quoting::{repair_quotes, shell_quote, strip_enclosing_quotes, QuotingMode};
use super::{CommandConfig, Subcommand};

const QUERY_INCLUDE_LONG: &str = "--include";
const QUERY_INCLUDE_SHORT: &str = "-i";
const QUERY_SAMPLE_SELECTOR: &str = "-s";
const QUERY_CONJUNCTION: &str = "&&";
const FILTER_INCLUDE_SAMPLE: &str = "--include-sam";
const FILTER_INCLUDE_VARIANT: &str = "--include-var";

#[derive(Debug, Clone)]
pub struct CommandBuilder {
    tool: String,
    format_marker: String,
    formats: FormatSet,
    quoting: QuotingMode,
}

impl CommandBuilder {
    pub fn new(config: &CommandConfig) -> Self {
        Self {
            tool: config.tool.clone(),
            format_marker: config.format_marker.clone(),
            formats: FormatSet {
                sample: FormatExpression::new(config.sample_format.clone()),
                variant: FormatExpression::new(config.variant_format.clone()),
            },
            quoting: config.quoting,
        }
    }

    /// Build the command line for `subcommand` against `file`.
    pub fn build(
        &self,
        subcommand: Subcommand,
        file: &str,
        sample: &Clause,
        variant: &Clause,
    ) -> String {
        let parts = match subcommand {
            Subcommand::Query => self.query_parts(file, sample, variant),
            Subcommand::Filter => self.filter_parts(file, sample, variant),
        };
        parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn query_parts(&self, file: &str, sample: &Clause, variant: &Clause) -> Vec<String> {
        let mut parts = vec![self.tool.clone(), Subcommand::Query.as_str().to_string()];

        let sample_on = sample.contributes();
        if sample_on {
            parts.push(QUERY_INCLUDE_LONG.to_string());
            parts.push(QUERY_SAMPLE_SELECTOR.to_string());
            parts.push(self.predicate_body(ClauseKind::Sample, sample));
        }
        if variant.contributes() {
            if sample_on {
                parts.push(QUERY_CONJUNCTION.to_string());
            }
            parts.push(QUERY_INCLUDE_SHORT.to_string());
            parts.push(self.predicate_body(ClauseKind::Variant, variant));
        }

        parts.push(file.to_string());
        parts
    }

    fn filter_parts(&self, file: &str, sample: &Clause, variant: &Clause) -> Vec<String> {
        let mut parts = vec![
            self.tool.clone(),
            Subcommand::Filter.as_str().to_string(),
            file.to_string(),
        ];

        for (flag, clause) in [
            (FILTER_INCLUDE_SAMPLE, sample),
            (FILTER_INCLUDE_VARIANT, variant),
        ] {
            if clause.contributes() {
                parts.push(flag.to_string());
                parts.push(self.filter_argument(&clause.raw_text));
            }
        }

        parts
    }

    /// Verbatim text when the user supplied a format flag, otherwise the quoted
    /// text followed by the default format for `kind`.
    fn predicate_body(&self, kind: ClauseKind, clause: &Clause) -> String {
        if clause.is_preformatted(&self.format_marker) {
            return clause.raw_text.clone();
        }
        format!(
            "{} {} {}",
            self.quote_predicate(&clause.raw_text),
            self.format_marker,
            self.quote_predicate(self.formats.for_kind(kind).as_str())
        )
    }

    fn quote_predicate(&self, text: &str) -> String {
        match self.quoting {
            QuotingMode::Heuristic => format!("'{}'", text),
            QuotingMode::Shell => shell_quote(text),
        }
    }

    fn filter_argument(&self, text: &str) -> String {
        match self.quoting {
            QuotingMode::Heuristic => repair_quotes(text),
            QuotingMode::Shell => shell_quote(strip_enclosing_quotes(text)),
        }
    }
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::new(&CommandConfig::default())
    }
}
