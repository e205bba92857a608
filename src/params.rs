//! Parameter Sets
//!
//! Named parameter records persisted as one JSON file each under a folder, with an
//! optional default template that constrains allowed keys and backfills missing ones.

mod manager;
pub mod record;
pub mod storage;

pub use manager::{DefaultSource, ParamsManager, DEFAULT_RECORD_NAME};
pub use record::{merge_with_defaults, ParamRecord};
pub use storage::RecordStore;
