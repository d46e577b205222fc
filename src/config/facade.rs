//! Config loading facade: defaults, global file, then workspace files.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::ClipsmithConfig;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// Loads configuration by composing the merge policy and file sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace. Workspace files override the
    /// global file, which overrides defaults.
    pub fn load(workspace_root: &Path) -> Result<ClipsmithConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder.build()?.try_deserialize()
    }

    /// Load configuration from a single explicit file, skipping the usual
    /// source hierarchy. Defaults still fill unset fields.
    pub fn load_from_file(path: &Path) -> Result<ClipsmithConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(
            File::with_name(path.to_str().ok_or_else(|| {
                ConfigError::Message(format!("Non-UTF8 config path: {}", path.display()))
            })?)
            .required(true),
        );
        builder.build()?.try_deserialize()
    }

    /// Path of the global config file, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
