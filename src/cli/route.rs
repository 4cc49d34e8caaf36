//! CLI route: single route table and run context. Dispatches to view handlers and
//! presentation.

use crate::cli::form::FormSession;
use crate::cli::help::command_name;
use crate::cli::parse::{ClauseArgs, Commands, ConfigCommands};
use crate::cli::presentation::{
    format_missing_files, format_submission_report, format_suggestions_json,
    format_suggestions_text, stdout_color_enabled,
};
use crate::client::{HttpTransport, SubmissionClient, SuggestionClient, Transport};
use crate::command::{Clause, ClauseKind, CommandBuilder, Subcommand};
use crate::config::{ConfigLoader, ConsoleConfig};
use crate::error::ConsoleError;
use crate::pfile::PfileTarget;
use crate::view::handlers::{self, on_ask, on_submit};
use crate::view::{ClausePanel, ResultMessage, ViewState};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{info, warn};

/// Text to print plus whether the backend reported success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub succeeded: bool,
}

impl CommandOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            succeeded: true,
        }
    }
}

/// Runtime context for CLI execution: merged config, command builder and clients.
pub struct RunContext {
    config: ConsoleConfig,
    builder: CommandBuilder,
    submission: SubmissionClient,
    suggestions: SuggestionClient,
    runtime: Runtime,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root, optional config path and optional
    /// server override.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        server: Option<String>,
    ) -> Result<Self, ConsoleError> {
        let mut config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        if let Some(base_url) = server {
            config.server.base_url = base_url;
        }

        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ConsoleError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;

        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(&config.server)?);
        Self::with_transport(config, transport)
    }

    /// Build a context over an arbitrary transport.
    pub fn with_transport(
        config: ConsoleConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConsoleError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            builder: CommandBuilder::new(&config.command),
            submission: SubmissionClient::new(Arc::clone(&transport), config.server.submit_path.clone()),
            suggestions: SuggestionClient::new(transport, config.server.suggest_path.clone()),
            color: stdout_color_enabled(
                std::io::stdout().is_terminal(),
                std::env::var_os("NO_COLOR").as_deref(),
            ),
            runtime,
            config,
        })
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ConsoleError> {
        info!(command = command_name(command), "executing");
        match command {
            Commands::Query(args) => self.handle_submit(Subcommand::Query, args),
            Commands::Filter(args) => self.handle_submit(Subcommand::Filter, args),
            Commands::Suggest {
                kind,
                file,
                prompt,
                select,
                format,
            } => self.handle_suggest((*kind).into(), file, prompt, *select, format),
            Commands::Form { file } => {
                let session = FormSession {
                    runtime: &self.runtime,
                    builder: &self.builder,
                    submission: &self.submission,
                    suggestions: &self.suggestions,
                    color: self.color,
                };
                session.run(ViewState::new(file.clone()))
            }
            Commands::Config { command } => match command {
                ConfigCommands::Show => Ok(CommandOutput::ok(self.config.to_toml()?)),
                ConfigCommands::Validate => Ok(CommandOutput::ok("Configuration is valid.")),
            },
        }
    }

    fn handle_submit(
        &self,
        subcommand: Subcommand,
        args: &ClauseArgs,
    ) -> Result<CommandOutput, ConsoleError> {
        let mut view = view_from_args(args);
        let mut notes = Vec::new();

        if args.check_files {
            let missing = PfileTarget::from_prefix(args.file.clone()).missing_files();
            if !missing.is_empty() {
                warn!(prefix = %args.file, missing = missing.len(), "pfile companions missing locally");
                notes.push(format_missing_files(&missing));
            }
        }

        if args.dry_run {
            notes.push(handlers::build_command(&view, &self.builder, subcommand));
            return Ok(CommandOutput::ok(notes.join("\n")));
        }

        let (command, outcome) = self.runtime.block_on(on_submit(
            &mut view,
            &self.builder,
            &self.submission,
            subcommand,
        ));
        let outcome = outcome?;
        let result = view.result.unwrap_or_else(ResultMessage::failure);
        notes.push(format_submission_report(&command, &result, &outcome, self.color));

        Ok(CommandOutput {
            text: notes.join("\n"),
            succeeded: outcome.is_success(),
        })
    }

    fn handle_suggest(
        &self,
        kind: ClauseKind,
        file: &str,
        prompt: &str,
        select: Option<usize>,
        format: &str,
    ) -> Result<CommandOutput, ConsoleError> {
        let mut view = ViewState::new(file);
        handlers::on_prompt(&mut view, kind, prompt);
        self.runtime
            .block_on(on_ask(&mut view, &self.suggestions, kind))?;

        if let Some(n) = select {
            let picked = n
                .checked_sub(1)
                .map(|index| handlers::on_select_suggestion(&mut view, kind, index))
                .unwrap_or(false);
            if !picked {
                return Err(ConsoleError::Interaction(format!(
                    "No suggestion #{} (received {})",
                    n,
                    view.panel(kind).suggestions.len()
                )));
            }
            return Ok(CommandOutput::ok(view.clause(kind).raw_text.clone()));
        }

        let suggestions = &view.panel(kind).suggestions;
        let text = if format == "json" {
            format_suggestions_json(kind, suggestions)?
        } else {
            format_suggestions_text(kind, suggestions)
        };
        Ok(CommandOutput::ok(text))
    }
}

/// One-shot form state: a clause is ticked when its flag was given.
pub fn view_from_args(args: &ClauseArgs) -> ViewState {
    let panel = |text: &Option<String>| ClausePanel {
        clause: match text {
            Some(text) => Clause::enabled(text.clone()),
            None => Clause::disabled(),
        },
        ..ClausePanel::default()
    };
    ViewState {
        file: args.file.clone(),
        sample: panel(&args.sample),
        variant: panel(&args.variant),
        result: None,
    }
}
