//! Shared test utilities for integration tests

use paramdir::{ParamRecord, ParamsManager};
use serde_json::Value;
use tempfile::TempDir;

/// Unwrap a `json!` object literal into a record
pub fn record(value: Value) -> ParamRecord {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {}", other),
    }
}

/// Manager over a fresh temp folder with the given template
pub fn manager_with_defaults(defaults: Value) -> (TempDir, ParamsManager) {
    let temp_dir = TempDir::new().unwrap();
    let manager = ParamsManager::with_defaults(temp_dir.path().join("params"), record(defaults));
    (temp_dir, manager)
}
