//! Errors raised while locating or validating `.pt.yaml`

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// No file with the expected name between the start directory and the root.
    #[error("no {file_name} file found in {} or any parent directory; please create one", .start.display())]
    NotFound { file_name: String, start: PathBuf },

    #[error("missing required key `{key}` in {}", .path.display())]
    MissingKey { key: &'static str, path: PathBuf },

    #[error("required key `{key}` has no value in {}", .path.display())]
    EmptyValue { key: &'static str, path: PathBuf },

    #[error("config key \"{key}\" must be a scalar value, found {kind} ({})", .path.display())]
    InvalidValue { key: &'static str, kind: &'static str, path: PathBuf },

    #[error("invalid YAML in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("config file {} must contain a key-value mapping", .path.display())]
    NotAMapping { path: PathBuf },

    #[error("failed reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// The required key this error names, if it is a validation failure.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::MissingKey { key, .. }
            | Self::EmptyValue { key, .. }
            | Self::InvalidValue { key, .. } => Some(*key),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
