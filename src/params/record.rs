//! Parameter records and the default-template merge.

use crate::error::{ParamsError, Result};
use serde_json::{Map, Value};

/// A flat mapping of parameter keys to JSON values.
///
/// Equality is structural; key order never matters.
pub type ParamRecord = Map<String, Value>;

/// Sorted key list of a template, as reported in `UnknownKey` errors.
pub fn allowed_keys(template: &ParamRecord) -> Vec<String> {
    let mut keys: Vec<String> = template.keys().cloned().collect();
    keys.sort();
    keys
}

/// Check that every key of `params` exists in `template`.
pub fn validate_keys(template: &ParamRecord, params: &ParamRecord) -> Result<()> {
    match params.keys().find(|k| !template.contains_key(*k)) {
        Some(key) => Err(ParamsError::UnknownKey {
            key: key.clone(),
            allowed: allowed_keys(template),
        }),
        None => Ok(()),
    }
}

/// Validate `params` against `template` and backfill missing keys from it.
///
/// Returns a new record; `params` is left untouched. The result carries exactly
/// the template's key set.
pub fn merge_with_defaults(template: &ParamRecord, params: &ParamRecord) -> Result<ParamRecord> {
    validate_keys(template, params)?;

    let mut merged = params.clone();
    for (key, value) in template {
        if !merged.contains_key(key) {
            merged.insert(key.clone(), value.clone());
        }
    }
    Ok(merged)
}
