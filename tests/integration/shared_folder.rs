//! Two managers over one folder see each other's records; last write wins

use super::test_utils::record;
use paramdir::{ParamsError, ParamsManager};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_second_manager_sees_existing_record() {
    let temp_dir = TempDir::new().unwrap();
    let first = ParamsManager::without_defaults(temp_dir.path());
    let second = ParamsManager::with_defaults(temp_dir.path(), record(json!({"a": 0, "b": 0})));

    first
        .set_params("x", &record(json!({"a": 1, "b": 1})), false)
        .unwrap();

    assert!(!second.set_params("x", &record(json!({"a": 1, "b": 1})), false).unwrap());
    assert!(matches!(
        second.set_params("x", &record(json!({"a": 1})), false),
        Err(ParamsError::Conflict { .. })
    ));
}

#[test]
fn test_last_overwrite_wins() {
    let temp_dir = TempDir::new().unwrap();
    let first = ParamsManager::without_defaults(temp_dir.path());
    let second = ParamsManager::without_defaults(temp_dir.path());

    first.set_params("x", &record(json!({"v": 1})), false).unwrap();
    second.set_params("x", &record(json!({"v": 2})), true).unwrap();
    first.set_params("x", &record(json!({"v": 3})), true).unwrap();

    assert_eq!(second.load("x").unwrap(), record(json!({"v": 3})));
    assert_eq!(first.names().unwrap(), vec!["x".to_string()]);
}
