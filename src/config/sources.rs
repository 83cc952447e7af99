//! Configuration sources, in merge order.

pub mod config_file;
pub mod environment;
