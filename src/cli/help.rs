//! CLI command-name contract for logging and routing.

use crate::cli::parse::{Commands, ConfigCommands};

/// Command name string for log records (e.g. "query", "config.show").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Query(_) => "query",
        Commands::Filter(_) => "filter",
        Commands::Suggest { .. } => "suggest",
        Commands::Form { .. } => "form",
        Commands::Config { command } => match command {
            ConfigCommands::Show => "config.show",
            ConfigCommands::Validate => "config.validate",
        },
    }
}
