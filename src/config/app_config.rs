//! The validated project configuration

use serde_yaml::{Mapping, Value};
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Project settings read from `.pt.yaml`.
///
/// `project`, `api_key` and `user` are checked once here; a value of this type
/// always has all three.
#[derive(Clone, PartialEq, Eq)]
pub struct AppConfig {
    project: String,
    api_key: String,
    user: String,
    source: PathBuf,
}

impl AppConfig {
    /// Parse YAML text and validate it. `source` is only used in error messages
    /// and reported back by [`AppConfig::source`].
    pub fn from_yaml_str(content: &str, source: &Path) -> Result<Self, ConfigError> {
        let value: Value = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Malformed { path: source.to_path_buf(), source: e })?;

        let mapping = match value {
            // An empty document parses as null.
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => return Err(ConfigError::NotAMapping { path: source.to_path_buf() }),
        };

        Self::from_mapping(mapping, source)
    }

    /// Validate an already-parsed mapping. Keys other than the required ones,
    /// string or not, are ignored.
    pub fn from_mapping(mapping: Mapping, source: &Path) -> Result<Self, ConfigError> {
        Ok(Self {
            project: required("project", &mapping, source)?,
            api_key: required("api_key", &mapping, source)?,
            user: required("user", &mapping, source)?,
            source: source.to_path_buf(),
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Path of the file this configuration was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("project", &self.project)
            .field("api_key", &"[REDACTED]")
            .field("user", &self.user)
            .field("source", &self.source)
            .finish()
    }
}

fn required(key: &'static str, mapping: &Mapping, source: &Path) -> Result<String, ConfigError> {
    let invalid = |kind| ConfigError::InvalidValue { key, kind, path: source.to_path_buf() };
    match mapping.get(key).cloned() {
        None => Err(ConfigError::MissingKey { key, path: source.to_path_buf() }),
        Some(Value::Null) => Err(ConfigError::EmptyValue { key, path: source.to_path_buf() }),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Sequence(_)) => Err(invalid("a sequence")),
        Some(Value::Mapping(_)) => Err(invalid("a mapping")),
        Some(Value::Tagged(_)) => Err(invalid("a tagged value")),
    }
}
