//! CLI parse: clap types for pgen-console. No behavior; definitions only.

use crate::command::ClauseKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pgen-console - compose and submit pgen-rs query/filter commands
#[derive(Parser)]
#[command(name = "pgen-console")]
#[command(about = "Compose pgen-rs query/filter commands, ask for AI suggestions and submit them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (looked up for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides server.base_url)
    #[arg(long)]
    pub server: Option<String>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a `pgen-rs query` command and submit it
    Query(ClauseArgs),
    /// Build a `pgen-rs filter` command and submit it
    Filter(ClauseArgs),
    /// Ask the AI endpoint for clause suggestions
    Suggest {
        /// Clause the suggestions are for
        #[arg(long, value_enum)]
        kind: KindArg,
        /// pfile prefix of the target dataset
        #[arg(long)]
        file: String,
        /// Free-text description of the wanted predicate
        #[arg(long)]
        prompt: String,
        /// Print only suggestion number N (1-based)
        #[arg(long)]
        select: Option<usize>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Interactive form: toggle clauses, ask for suggestions, submit
    Form {
        /// Initial pfile prefix
        #[arg(long, default_value = "")]
        file: String,
    },
    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Form state for one-shot `query` / `filter` runs. A clause is enabled by
/// passing its flag.
#[derive(Args, Debug, Clone)]
pub struct ClauseArgs {
    /// pfile prefix of the target dataset
    #[arg(long)]
    pub file: String,
    /// Sample clause text
    #[arg(long)]
    pub sample: Option<String>,
    /// Variant clause text
    #[arg(long)]
    pub variant: Option<String>,
    /// Print the command without submitting it
    #[arg(long)]
    pub dry_run: bool,
    /// Warn when the .pgen/.psam/.pvar files are missing locally
    #[arg(long)]
    pub check_files: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the merged configuration as TOML
    Show,
    /// Validate the merged configuration
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Sample,
    Variant,
}

impl From<KindArg> for ClauseKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Sample => ClauseKind::Sample,
            KindArg::Variant => ClauseKind::Variant,
        }
    }
}
