//! Integration tests for paramdir

mod config_integration;
mod shared_folder;
mod test_utils;
