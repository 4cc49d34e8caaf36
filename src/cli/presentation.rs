//! Presentation: status lines, submission reports and suggestion tables.

use crate::client::SubmissionOutcome;
use crate::command::ClauseKind;
use crate::error::ConsoleError;
use crate::view::{ResultMessage, StatusColor};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::ffi::OsStr;
use std::path::PathBuf;

const EMPTY_SUGGESTION: &str = "(empty)";

/// Color the result line only on a terminal, and never when `NO_COLOR` is set to a
/// non-empty value. Independent of the log color setting.
pub fn stdout_color_enabled(stdout_is_terminal: bool, no_color: Option<&OsStr>) -> bool {
    stdout_is_terminal && no_color.map_or(true, |value| value.is_empty())
}

pub fn format_result_line(message: &ResultMessage, color: bool) -> String {
    if !color {
        return message.text.clone();
    }
    match message.color {
        StatusColor::Green => message.text.green().to_string(),
        StatusColor::Red => message.text.red().to_string(),
    }
}

/// Command, status line and, on semantic failure, the backend's response.
pub fn format_submission_report(
    command: &str,
    result: &ResultMessage,
    outcome: &SubmissionOutcome,
    color: bool,
) -> String {
    let mut out = format!("Command: {}\n{}", command, format_result_line(result, color));
    if !outcome.is_success() && !outcome.body().is_empty() {
        out.push_str(&format!("\nBackend response: {}", outcome.body()));
    }
    out
}

pub fn format_suggestions_text(kind: ClauseKind, suggestions: &[String]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#".to_string(), format!("{} suggestion", kind)]);
    for (i, suggestion) in suggestions.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), display_suggestion(suggestion).to_string()]);
    }
    table.to_string()
}

pub fn format_suggestions_json(
    kind: ClauseKind,
    suggestions: &[String],
) -> Result<String, ConsoleError> {
    let out = json!({ "query_type": kind.label(), "suggestions": suggestions });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ConsoleError::Interaction(format!("Failed to render JSON: {}", e)))
}

/// Label used in menus and tables; blank lines still need something to click.
pub fn display_suggestion(suggestion: &str) -> &str {
    if suggestion.is_empty() {
        EMPTY_SUGGESTION
    } else {
        suggestion
    }
}

pub fn format_missing_files(missing: &[PathBuf]) -> String {
    missing
        .iter()
        .map(|path| format!("warning: {} not found locally", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
