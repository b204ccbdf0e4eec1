//! Configuration management
//!
//! A TOML file holding title validation limits and the seed lists the
//! host starts from. Nothing is ever written back.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::types::FilterMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub lists: Vec<SeedList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Titles this long (in characters) or longer are rejected
    pub max_title_length: usize,
    /// Titles longer than this get a warning
    pub recommended_title_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: 20,
            recommended_title_length: 10,
        }
    }
}

/// A list to create at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedList {
    pub title: String,
    #[serde(default)]
    pub filter: FilterMode,
    #[serde(default)]
    pub tasks: Vec<SeedTask>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTask {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl SeedTask {
    fn new(title: &str, done: bool) -> Self {
        Self {
            title: title.to_string(),
            done,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file at the default location is not an error; the
    /// built-in defaults are used instead. `TODO_CONFIG` must point at a
    /// readable file.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var("TODO_CONFIG").is_ok();
        let config_path = resolve_config_path()?;

        if !explicit && !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        tracing::debug!(path = %path.display(), lists = config.lists.len(), "config loaded");
        Ok(config)
    }

    /// Create a default configuration with the two starter lists
    pub fn default_config() -> Self {
        Self {
            validation: ValidationConfig::default(),
            lists: vec![
                SeedList {
                    title: "What to learn".to_string(),
                    filter: FilterMode::All,
                    tasks: vec![
                        SeedTask::new("HTML & CSS", true),
                        SeedTask::new("CSS & SCSS", true),
                        SeedTask::new("ES6/TS", false),
                        SeedTask::new("REDUX", false),
                    ],
                },
                SeedList {
                    title: "What to buy".to_string(),
                    filter: FilterMode::All,
                    tasks: vec![
                        SeedTask::new("Water", true),
                        SeedTask::new("Salt", true),
                        SeedTask::new("Sugar", false),
                        SeedTask::new("Milk", false),
                    ],
                },
            ],
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TODO_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("todo").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_seed() {
        let config = Config::default_config();

        assert_eq!(config.lists.len(), 2);
        assert_eq!(config.lists[0].title, "What to learn");
        assert_eq!(config.lists[1].tasks.len(), 4);
        assert!(config.lists[1].tasks[0].done);
        assert!(!config.lists[1].tasks[3].done);
        assert_eq!(config.validation.max_title_length, 20);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[validation]
max_title_length = 40

[[lists]]
title = "Work"
filter = "active"
tasks = [{{ title = "Report", done = true }}, {{ title = "Email" }}]

[[lists]]
title = "Empty"
"#
        )
        .unwrap();

        let config = Config::load_from_path(file.path()).unwrap();

        assert_eq!(config.validation.max_title_length, 40);
        // Unset field keeps its default
        assert_eq!(config.validation.recommended_title_length, 10);
        assert_eq!(config.lists.len(), 2);
        assert_eq!(config.lists[0].filter, FilterMode::Active);
        assert!(config.lists[0].tasks[0].done);
        assert!(!config.lists[0].tasks[1].done);
        assert_eq!(config.lists[1].filter, FilterMode::All);
        assert!(config.lists[1].tasks.is_empty());
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let result = Config::load_from_path(Path::new("/nonexistent/todo/config.toml"));
        assert!(matches!(
            result,
            Err(crate::TodoError::Config(ConfigError::ReadError(_)))
        ));
    }

    #[test]
    fn test_load_from_path_invalid_filter() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[lists]]\ntitle = \"Work\"\nfilter = \"someday\"").unwrap();

        let result = Config::load_from_path(file.path());
        assert!(matches!(
            result,
            Err(crate::TodoError::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_from_env() {
        std::env::set_var("TODO_CONFIG", "/tmp/todo-test/config.toml");
        let path = resolve_config_path().unwrap();
        std::env::remove_var("TODO_CONFIG");

        assert_eq!(path, PathBuf::from("/tmp/todo-test/config.toml"));
    }

    #[test]
    #[serial]
    fn test_load_explicit_missing_file_is_error() {
        std::env::set_var("TODO_CONFIG", "/nonexistent/todo/config.toml");
        let result = Config::load();
        std::env::remove_var("TODO_CONFIG");

        assert!(result.is_err());
    }
}
