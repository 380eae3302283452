//! pt: project settings for the pt tracker client
//!
//! Locates the nearest `.pt.yaml`, validates it and exposes the project id,
//! API key and user name.

pub mod config;

pub use config::{load, load_from, AppConfig, ConfigError, CONFIG_FILE_NAME};
