//! Infrastructure layer for filesystem locations.

pub mod paths;

pub use paths::{config_dir, data_dir, default_config_path};
