//! Event handlers over `ViewState`.
//!
//! Each function corresponds to one user event. The async handlers build their
//! request from the state, await exactly one response and only then write back, so
//! overlapping submissions resolve last-writer-wins on the status line.

use super::{ResultMessage, ViewState};
use crate::client::{SubmissionClient, SubmissionOutcome, SuggestionClient};
use crate::command::{ClauseKind, CommandBuilder, Subcommand};
use crate::error::ConsoleError;
use tracing::debug;

/// Checkbox changed.
pub fn on_toggle(view: &mut ViewState, kind: ClauseKind, checked: bool) {
    view.panel_mut(kind).clause.enabled = checked;
}

/// Clause input edited.
pub fn on_input(view: &mut ViewState, kind: ClauseKind, text: impl Into<String>) {
    view.panel_mut(kind).clause.raw_text = text.into();
}

/// Prompt input edited.
pub fn on_prompt(view: &mut ViewState, kind: ClauseKind, text: impl Into<String>) {
    view.panel_mut(kind).prompt = text.into();
}

/// Suggestion entry clicked: copy its exact text into the clause input.
///
/// Returns false when `index` is outside the current list.
pub fn on_select_suggestion(view: &mut ViewState, kind: ClauseKind, index: usize) -> bool {
    let panel = view.panel_mut(kind);
    match panel.suggestions.get(index) {
        Some(text) => {
            panel.clause.raw_text = text.clone();
            true
        }
        None => false,
    }
}

/// Replace a clause's suggestion list.
pub fn apply_suggestions(view: &mut ViewState, kind: ClauseKind, suggestions: Vec<String>) {
    view.panel_mut(kind).suggestions = suggestions;
}

/// Write the status line for a finished submission.
pub fn apply_submission(view: &mut ViewState, outcome: &Result<SubmissionOutcome, ConsoleError>) {
    view.result = Some(match outcome {
        Ok(outcome) if outcome.is_success() => ResultMessage::success(),
        _ => ResultMessage::failure(),
    });
}

/// Assemble the command line from the current state.
pub fn build_command(view: &ViewState, builder: &CommandBuilder, subcommand: Subcommand) -> String {
    builder.build(
        subcommand,
        &view.file,
        view.clause(ClauseKind::Sample),
        view.clause(ClauseKind::Variant),
    )
}

/// Query or filter button clicked.
///
/// Returns the command that was sent together with the outcome. The status line
/// is updated for transport errors as well.
pub async fn on_submit(
    view: &mut ViewState,
    builder: &CommandBuilder,
    client: &SubmissionClient,
    subcommand: Subcommand,
) -> (String, Result<SubmissionOutcome, ConsoleError>) {
    let command = build_command(view, builder, subcommand);
    debug!(command = %command, "submitting");
    let outcome = client.submit(&command).await;
    apply_submission(view, &outcome);
    (command, outcome)
}

/// Ask button clicked: fetch suggestions for `kind` using its prompt.
pub async fn on_ask(
    view: &mut ViewState,
    client: &SuggestionClient,
    kind: ClauseKind,
) -> Result<usize, ConsoleError> {
    let prompt = view.panel(kind).prompt.clone();
    let suggestions = client.fetch(kind, &view.file, &prompt).await?;
    let count = suggestions.len();
    apply_suggestions(view, kind, suggestions);
    Ok(count)
}
