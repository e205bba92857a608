//! Paramdir: Named Parameter Sets on Disk
//!
//! Manages named sets of key-value parameters persisted as JSON files within a folder,
//! with an optional default parameter set used to fill in missing keys and restrict
//! the allowed ones.

pub mod config;
pub mod error;
pub mod logging;
pub mod params;

pub use error::{ParamsError, Result};
pub use params::{DefaultSource, ParamRecord, ParamsManager, DEFAULT_RECORD_NAME};
