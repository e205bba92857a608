//! Parameter set manager
//!
//! Loads and saves named parameter records under one folder, validating keys against
//! and backfilling values from an optional default template.

use crate::config::ManagerConfig;
use crate::error::{ParamsError, Result};
use crate::params::record::{merge_with_defaults, ParamRecord};
use crate::params::storage::RecordStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Conventional name for a default template record. Never loaded implicitly.
pub const DEFAULT_RECORD_NAME: &str = "default";

/// Where a manager takes its default template from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DefaultSource {
    /// No template: keys are not validated and nothing is backfilled.
    #[default]
    None,
    /// Use this record as the template.
    Params(ParamRecord),
    /// Load the template from the record with this name in the managed folder.
    Named(String),
}

impl DefaultSource {
    pub fn named(name: impl Into<String>) -> Self {
        DefaultSource::Named(name.into())
    }
}

/// Manager for named parameter sets stored in one folder.
///
/// The folder is assumed to be owned by a single caller at a time. No locking is done,
/// so two managers (or external writers) sharing a folder race and the last write wins.
#[derive(Debug, Clone)]
pub struct ParamsManager {
    store: RecordStore,
    default_params: Option<ParamRecord>,
}

impl ParamsManager {
    /// Create a manager over `folder`.
    ///
    /// With [`DefaultSource::Named`], the template is read immediately and a missing
    /// record fails with [`ParamsError::NotFound`].
    pub fn new<P: AsRef<Path>>(folder: P, defaults: DefaultSource) -> Result<Self> {
        let store = RecordStore::new(folder);
        let default_params = match defaults {
            DefaultSource::None => None,
            DefaultSource::Params(params) => Some(params),
            DefaultSource::Named(name) => {
                debug!(record = %name, folder = %store.folder().display(), "Loading default params");
                Some(store.read(&name)?)
            }
        };
        Ok(Self {
            store,
            default_params,
        })
    }

    pub fn with_defaults<P: AsRef<Path>>(folder: P, default_params: ParamRecord) -> Self {
        Self {
            store: RecordStore::new(folder),
            default_params: Some(default_params),
        }
    }

    pub fn without_defaults<P: AsRef<Path>>(folder: P) -> Self {
        Self {
            store: RecordStore::new(folder),
            default_params: None,
        }
    }

    /// Build a manager from loaded configuration.
    pub fn from_config(config: &ManagerConfig) -> Result<Self> {
        config.validate()?;
        let defaults = match &config.default_name {
            Some(name) => DefaultSource::Named(name.clone()),
            None => DefaultSource::None,
        };
        Self::new(&config.folder, defaults)
    }

    /// Folder this manager loads records from and saves them to
    pub fn folder(&self) -> &Path {
        self.store.folder()
    }

    /// Copy of the default template, if one is configured
    pub fn default_params(&self) -> Option<ParamRecord> {
        self.default_params.clone()
    }

    /// File path backing the record `name`
    pub fn path(&self, name: &str) -> Result<PathBuf> {
        self.store.path_for(name)
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        self.store.exists(name)
    }

    /// Names of all stored records, sorted
    pub fn names(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    /// Load the record stored under `name`.
    pub fn load(&self, name: &str) -> Result<ParamRecord> {
        let params = self.store.read(name)?;
        debug!(record = %name, keys = params.len(), "Loaded params");
        Ok(params)
    }

    /// The record `set_params` would persist for `params`.
    ///
    /// Without a template this is `params` unchanged.
    pub fn merged(&self, params: &ParamRecord) -> Result<ParamRecord> {
        match &self.default_params {
            Some(template) => merge_with_defaults(template, params),
            None => Ok(params.clone()),
        }
    }

    /// Store `params` under `name`, backfilled from the default template.
    ///
    /// Returns `true` when no record existed and it was written fresh. Returns `false`
    /// when an identical record was already present, and also when a differing record
    /// was replaced because `overwrite` was set. A differing record without `overwrite`
    /// fails with [`ParamsError::Conflict`] and is left as it was.
    ///
    /// Records are compared as JSON values, so an integer and a float never match:
    /// a stored `1.0` resubmitted as `1` is a conflict.
    pub fn set_params(&self, name: &str, params: &ParamRecord, overwrite: bool) -> Result<bool> {
        let params = self.merged(params)?;
        let path = self.store.path_for(name)?;

        if !path.is_file() {
            self.store.write(name, &params)?;
            info!(record = %name, path = %path.display(), "Wrote new params");
            return Ok(true);
        }

        let existing = self.store.read(name)?;
        if existing == params {
            debug!(record = %name, "Params already consistent");
            return Ok(false);
        }

        if !overwrite {
            return Err(ParamsError::Conflict {
                name: name.to_string(),
                path,
            });
        }

        self.store.write(name, &params)?;
        info!(record = %name, path = %path.display(), "Overwrote params");
        Ok(false)
    }
}
