//! Config file loading

use std::fs;
use std::path::Path;

use super::app_config::AppConfig;
use super::error::ConfigError;
use super::locator::find_upward;

/// Name of the project file searched for by [`load`].
pub const CONFIG_FILE_NAME: &str = ".pt.yaml";

/// Load `.pt.yaml` starting from the process working directory.
pub fn load() -> Result<AppConfig, ConfigError> {
    let cwd = std::env::current_dir()
        .map_err(|e| ConfigError::Io { path: ".".into(), source: e })?;
    load_from(&cwd)
}

/// Load `.pt.yaml` starting from `start` and walking up to the root.
pub fn load_from(start: &Path) -> Result<AppConfig, ConfigError> {
    load_named(start, CONFIG_FILE_NAME)
}

pub fn load_named(start: &Path, file_name: &str) -> Result<AppConfig, ConfigError> {
    let Some(config_file) = find_upward(start, file_name) else {
        return Err(ConfigError::NotFound {
            file_name: file_name.to_string(),
            start: start.to_path_buf(),
        });
    };

    if config_file.parent() != Some(start) {
        tracing::debug!("Using {} (searched from {})", config_file.display(), start.display());
    }
    load_file(&config_file)
}

/// Load a specific file without any discovery.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io { path: path.to_path_buf(), source: e })?;

    let config = AppConfig::from_yaml_str(&content, path)?;
    tracing::info!("Loaded config for project {} from {}", config.project(), path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = "project: demo\napi_key: XYZ\nuser: alice\n";

    #[test]
    fn test_load_from_start_directory() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), VALID).expect("write");

        let cfg = load_from(tmp.path()).expect("config");
        assert_eq!(cfg.project(), "demo");
        assert_eq!(cfg.api_key(), "XYZ");
        assert_eq!(cfg.user(), "alice");
        assert_eq!(cfg.source(), tmp.path().join(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_load_from_nested_directory_finds_ancestor() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), VALID).expect("write");
        let nested = tmp.path().join("a").join("b").join("c");
        fs::create_dir_all(&nested).expect("mkdir");

        let cfg = load_from(&nested).expect("config");
        assert_eq!(cfg.project(), "demo");
        assert_eq!(cfg.api_key(), "XYZ");
        assert_eq!(cfg.user(), "alice");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_named(tmp.path(), ".pt.absent-everywhere.yaml").expect_err("should fail");
        assert!(err.is_not_found());
        assert!(err.to_string().contains(".pt.absent-everywhere.yaml"));
    }

    #[test]
    fn test_missing_api_key_names_key() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "project: demo\nuser: alice\n")
            .expect("write");

        let err = load_from(tmp.path()).expect_err("should fail");
        assert!(matches!(err, ConfigError::MissingKey { key: "api_key", .. }));
    }

    #[test]
    fn test_load_is_idempotent() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), VALID).expect("write");

        let first = load_from(tmp.path()).expect("first");
        let second = load_from(tmp.path()).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_file_is_reported_not_skipped() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "project: [unclosed\n")
            .expect("write");
        let nested = tmp.path().join("sub");
        fs::create_dir_all(&nested).expect("mkdir");

        let err = load_from(&nested).expect_err("should fail");
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn test_load_file_reads_explicit_path() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("custom.yaml");
        fs::write(&path, "project: 42\napi_key: k\nuser: u\nextra: true\n").expect("write");

        let cfg = load_file(&path).expect("config");
        assert_eq!(cfg.project(), "42");
    }

    #[test]
    fn test_load_file_missing_path_is_io_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = load_file(&tmp.path().join("nope.yaml")).expect_err("should fail");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
