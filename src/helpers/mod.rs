//! Helper Utilities

pub mod fs;

pub use fs::get_or_create_config_dir;
