//! File-backed record storage
//!
//! One JSON file per record, stored flat under a single folder:
//! `{folder}/{name}.json`

use crate::error::{ParamsError, Result};
use crate::params::record::ParamRecord;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

pub const RECORD_EXTENSION: &str = "json";

/// Reject names that would resolve outside the folder.
pub fn validate_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ParamsError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Flat directory of JSON records.
///
/// Writes go straight to the final path; there is no temp-file-then-rename step.
#[derive(Debug, Clone)]
pub struct RecordStore {
    folder: PathBuf,
}

impl RecordStore {
    pub fn new<P: AsRef<Path>>(folder: P) -> Self {
        Self {
            folder: folder.as_ref().to_path_buf(),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.folder.join(format!("{}.{}", name, RECORD_EXTENSION)))
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.path_for(name)?.is_file())
    }

    /// Read the record stored under `name`.
    ///
    /// Returns `NotFound` if there is no file, `Malformed` if the content is not a JSON object.
    pub fn read(&self, name: &str) -> Result<ParamRecord> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(ParamsError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        let content = fs::read_to_string(&path).map_err(|source| ParamsError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ParamsError::Malformed { path, source })
    }

    /// Write `record` under `name`, creating the folder (and parents) if missing.
    pub fn write(&self, name: &str, record: &ParamRecord) -> Result<PathBuf> {
        let path = self.path_for(name)?;

        if !self.folder.is_dir() {
            fs::create_dir_all(&self.folder).map_err(|source| ParamsError::Io {
                path: self.folder.clone(),
                source,
            })?;
        }

        let mut content =
            serde_json::to_string_pretty(record).map_err(|source| ParamsError::Malformed {
                path: path.clone(),
                source,
            })?;
        content.push('\n');

        fs::write(&path, content).map_err(|source| ParamsError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Sorted names of all records in the folder. A missing folder has no records.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.folder.is_dir() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.folder).map_err(|source| ParamsError::Io {
            path: self.folder.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!(
                        "Failed to read directory entry in {}: {}",
                        self.folder.display(),
                        e
                    );
                    continue;
                }
            };

            let path = entry.path();
            if path.extension() != Some(OsStr::new(RECORD_EXTENSION)) || !path.is_file() {
                continue;
            }

            match path.file_stem().and_then(|s| s.to_str()) {
                Some(name) => names.push(name.to_string()),
                None => {
                    tracing::warn!("Skipping record with non-UTF8 filename: {:?}", path);
                }
            }
        }

        names.sort();
        Ok(names)
    }
}
