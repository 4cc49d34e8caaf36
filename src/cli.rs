//! CLI domain: parse, route, presentation and the interactive form.
//! Route handlers stay thin; behavior lives in `view::handlers` and the clients.

mod form;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{ClauseArgs, Cli, Commands, ConfigCommands, KindArg};
pub use presentation::{
    display_suggestion, format_missing_files, format_result_line, format_submission_report,
    format_suggestions_json, format_suggestions_text, stdout_color_enabled,
};
pub use route::{view_from_args, CommandOutput, RunContext};
