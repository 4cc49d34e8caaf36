//! Config loader: merges sources in precedence order and deserializes.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::ConsoleConfig;
use config::{ConfigError, File};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load layered configuration for `workspace_root`.
    pub fn load(workspace_root: &Path) -> Result<ConsoleConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder
            .add_source(merge_policy::environment_source())
            .build()?
            .try_deserialize()
    }

    /// Load a single explicit file; environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<ConsoleConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(merge_policy::environment_source())
            .build()?
            .try_deserialize()
    }
}
