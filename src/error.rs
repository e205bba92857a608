//! Error types for parameter record management.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or persisting parameter records
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("No file at {} for record '{name}'", .path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("Key '{key}' not in default params keys. Possible keys are {allowed:?}")]
    UnknownKey { key: String, allowed: Vec<String> },

    #[error("Params for record '{name}' already exist at {} and are different", .path.display())]
    Conflict { name: String, path: PathBuf },

    #[error("Invalid record name: {0:?}")]
    InvalidName(String),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed params at {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for ParamsError {
    fn from(err: config::ConfigError) -> Self {
        ParamsError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ParamsError>;
