//! Configuration System
//!
//! Layered configuration for the backend endpoints, command assembly and logging.
//! Sources are merged by `ConfigLoader` with environment overrides on top, then
//! checked with `ConsoleConfig::validate`.

use serde::{Deserialize, Serialize};

pub use crate::client::ServerConfig;
pub use crate::command::CommandConfig;
use crate::logging::LoggingConfig;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Backend endpoints and timeouts
    #[serde(default)]
    pub server: ServerConfig,

    /// Command assembly settings
    #[serde(default)]
    pub command: CommandConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Server(String),
    Command(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Server(msg) => write!(f, "Server: {}", msg),
            ValidationError::Command(msg) => write!(f, "Command: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl ConsoleConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.server.validate() {
            errors.push(ValidationError::Server(e));
        }
        if let Err(e) = self.command.validate() {
            errors.push(ValidationError::Command(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render as TOML for `config show`.
    pub fn to_toml(&self) -> Result<String, crate::error::ConsoleError> {
        toml::to_string_pretty(self).map_err(|e| {
            crate::error::ConsoleError::ConfigError(format!("Failed to render config: {}", e))
        })
    }
}
