//! Configuration sources layered onto the builder.

pub mod config_file;
pub mod environment;
