//! Interactive form: the terminal rendition of the query page.
//!
//! Each menu entry maps to one handler in `view::handlers`. Submissions run one at
//! a time, so the status line always reflects the latest request.

use crate::cli::presentation::{display_suggestion, format_result_line};
use crate::cli::route::CommandOutput;
use crate::client::{SubmissionClient, SuggestionClient};
use crate::command::{ClauseKind, CommandBuilder, Subcommand};
use crate::error::ConsoleError;
use crate::view::handlers::{self, on_ask, on_submit};
use crate::view::ViewState;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use tokio::runtime::Runtime;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Toggle(ClauseKind),
    Edit(ClauseKind),
    Ask(ClauseKind),
    SetFile,
    Preview(Subcommand),
    Submit(Subcommand),
    Quit,
}

pub(crate) struct FormSession<'a> {
    pub runtime: &'a Runtime,
    pub builder: &'a CommandBuilder,
    pub submission: &'a SubmissionClient,
    pub suggestions: &'a SuggestionClient,
    pub color: bool,
}

impl FormSession<'_> {
    pub fn run(&self, mut view: ViewState) -> Result<CommandOutput, ConsoleError> {
        let theme = ColorfulTheme::default();
        if view.file.is_empty() {
            view.file = Input::<String>::with_theme(&theme)
                .with_prompt("pfile prefix")
                .interact_text()?;
        }

        let mut submitted = 0usize;
        loop {
            let actions = menu();
            let labels: Vec<String> = actions.iter().map(|a| label(&view, *a)).collect();
            let choice = Select::with_theme(&theme)
                .with_prompt(status_header(&view, self.color))
                .items(&labels)
                .default(0)
                .interact()?;

            match actions[choice] {
                Action::Toggle(kind) => {
                    let checked = view.input_disabled(kind);
                    handlers::on_toggle(&mut view, kind, checked);
                }
                Action::Edit(kind) => {
                    let text: String = Input::<String>::with_theme(&theme)
                        .with_prompt(format!("{} clause", kind))
                        .with_initial_text(view.clause(kind).raw_text.clone())
                        .allow_empty(true)
                        .interact_text()?;
                    handlers::on_input(&mut view, kind, text);
                }
                Action::Ask(kind) => self.ask(&theme, &mut view, kind)?,
                Action::SetFile => {
                    view.file = Input::<String>::with_theme(&theme)
                        .with_prompt("pfile prefix")
                        .with_initial_text(view.file.clone())
                        .interact_text()?;
                }
                Action::Preview(subcommand) => {
                    println!("{}", handlers::build_command(&view, self.builder, subcommand));
                }
                Action::Submit(subcommand) => {
                    let (command, outcome) = self.runtime.block_on(on_submit(
                        &mut view,
                        self.builder,
                        self.submission,
                        subcommand,
                    ));
                    submitted += 1;
                    println!("Command: {}", command);
                    if let Err(e) = &outcome {
                        warn!(error = %e, "submission failed");
                    }
                    if let Some(result) = &view.result {
                        println!("{}", format_result_line(result, self.color));
                    }
                }
                Action::Quit => break,
            }
        }

        let succeeded = view.result.as_ref().map(|r| r.is_success()).unwrap_or(true);
        Ok(CommandOutput {
            text: format!("{} submission(s) sent.", submitted),
            succeeded,
        })
    }

    fn ask(
        &self,
        theme: &ColorfulTheme,
        view: &mut ViewState,
        kind: ClauseKind,
    ) -> Result<(), ConsoleError> {
        let prompt: String = Input::<String>::with_theme(theme)
            .with_prompt(format!("Describe the {} clause", kind))
            .with_initial_text(view.panel(kind).prompt.clone())
            .interact_text()?;
        handlers::on_prompt(view, kind, prompt);

        if let Err(e) = self.runtime.block_on(on_ask(view, self.suggestions, kind)) {
            println!("Could not fetch suggestions: {}", e);
            return Ok(());
        }

        let mut labels: Vec<&str> = view
            .panel(kind)
            .suggestions
            .iter()
            .map(|s| display_suggestion(s))
            .collect();
        labels.push("(keep current text)");
        let picked = Select::with_theme(theme)
            .with_prompt(format!("{} suggestions", kind))
            .items(&labels)
            .default(0)
            .interact()?;
        handlers::on_select_suggestion(view, kind, picked);
        Ok(())
    }
}

fn menu() -> Vec<Action> {
    let mut actions = Vec::new();
    for kind in ClauseKind::ALL {
        actions.push(Action::Toggle(kind));
        actions.push(Action::Edit(kind));
        actions.push(Action::Ask(kind));
    }
    actions.extend([
        Action::SetFile,
        Action::Preview(Subcommand::Query),
        Action::Preview(Subcommand::Filter),
        Action::Submit(Subcommand::Query),
        Action::Submit(Subcommand::Filter),
        Action::Quit,
    ]);
    actions
}

fn label(view: &ViewState, action: Action) -> String {
    match action {
        Action::Toggle(kind) => format!(
            "[{}] {} clause",
            if view.input_disabled(kind) { " " } else { "x" },
            kind
        ),
        Action::Edit(kind) => format!("    edit: {}", view.clause(kind).raw_text),
        Action::Ask(kind) => format!("    ask AI for a {} clause", kind),
        Action::SetFile => format!("File: {}", view.file),
        Action::Preview(sub) => format!("Preview {}", sub),
        Action::Submit(sub) => format!("Submit {}", sub),
        Action::Quit => "Quit".to_string(),
    }
}

fn status_header(view: &ViewState, color: bool) -> String {
    match &view.result {
        Some(result) => format_result_line(result, color),
        None => "pgen-console".to_string(),
    }
}
