//! Project configuration discovery and validation
//!
//! Finds the nearest `.pt.yaml` by walking up from a directory, parses it as
//! YAML and checks that `project`, `api_key` and `user` are set.

pub mod app_config;
pub mod error;
pub mod loader;
pub mod locator;

pub use app_config::AppConfig;
pub use error::ConfigError;
pub use loader::{load, load_file, load_from, load_named, CONFIG_FILE_NAME};
pub use locator::find_upward;
