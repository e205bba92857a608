//! Configuration System
//!
//! Layered configuration for building a [`ParamsManager`](crate::params::ParamsManager):
//! built-in defaults, then an optional config file, then `PARAMDIR_*` environment variables.

use crate::error::ParamsError;
use crate::logging::LoggingConfig;
use crate::params::storage::validate_name;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod merge;
mod sources;

pub use merge::merge_policy::DEFAULT_FOLDER;
pub use sources::environment::ENV_PREFIX;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Folder holding the parameter records
    #[serde(default = "default_folder")]
    pub folder: PathBuf,

    /// Record to load as the default template. `None` disables defaults.
    #[serde(default)]
    pub default_name: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_folder() -> PathBuf {
    PathBuf::from(DEFAULT_FOLDER)
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            default_name: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl ManagerConfig {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.folder.as_os_str().is_empty() {
            return Err(ParamsError::Config("Folder cannot be empty".to_string()));
        }
        if let Some(name) = &self.default_name {
            validate_name(name)
                .map_err(|e| ParamsError::Config(format!("Invalid default_name: {}", e)))?;
        }
        Ok(())
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: defaults, then `config_file` if given, then environment.
    pub fn load(config_file: Option<&Path>) -> Result<ManagerConfig, ParamsError> {
        let mut builder = merge::merge_policy::builder_with_defaults()?;
        if let Some(path) = config_file {
            builder = sources::config_file::add_to_builder(builder, path)?;
        }
        builder = sources::environment::add_to_builder(builder)?;

        let config: ManagerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a single config file over the defaults, ignoring the environment.
    pub fn load_from_file(path: &Path) -> Result<ManagerConfig, ParamsError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::config_file::add_to_builder(builder, path)?;

        let config: ManagerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
