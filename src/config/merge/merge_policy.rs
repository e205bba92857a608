//! Merge rules: defaults first, then file, then environment.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

pub const DEFAULT_FOLDER: &str = "params";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder().set_default("folder", DEFAULT_FOLDER)
}
