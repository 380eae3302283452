//! Shared CLI utilities.

use anyhow::{Context, Result};
use std::path::PathBuf;

use pt::config::{ConfigError, CONFIG_FILE_NAME};

/// Resolve the directory the search starts from, defaulting to the working directory.
pub fn start_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => {
            if !dir.is_dir() {
                anyhow::bail!("Path is not a directory: {}", dir.display());
            }
            Ok(dir)
        }
        None => std::env::current_dir().context("Failed reading current directory"),
    }
}

/// Hide all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

/// Attach a remediation hint to loader errors the user can fix by editing files.
pub fn with_hint(err: ConfigError) -> anyhow::Error {
    let hint = if err.is_not_found() {
        format!("create a {CONFIG_FILE_NAME} in your project directory or pass --config")
    } else if let Some(key) = err.key() {
        format!("set `{key}` to a plain value in the config file")
    } else {
        return err.into();
    };
    anyhow::Error::new(err).context(hint)
}
