//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources win key by key. Order (lowest first): these defaults, the global
//! file, workspace `config/config.toml`, `config/{PGEN_CONSOLE_ENV}.toml`, then
//! `PGEN_CONSOLE_*` environment variables.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

pub const ENV_PREFIX: &str = "PGEN_CONSOLE";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("server.base_url", "http://127.0.0.1:8080")?
        .set_default("server.submit_path", "/submit_query")?
        .set_default("server.suggest_path", "/fetch_ai_response")?
        .set_default("command.tool", "pgen-rs")?
        .set_default("command.format_marker", "-f")
}

/// Environment source: `PGEN_CONSOLE_SERVER__BASE_URL` maps to `server.base_url`.
pub fn environment_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}
