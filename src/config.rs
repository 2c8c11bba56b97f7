use crate::model::ValidationMode;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// When edits re-validate a form
    pub validation_mode: ValidationMode,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_level: String,
    /// Log destination; no logging output when unset since stdout belongs to the UI
    pub log_file: Option<PathBuf>,
    /// Event poll timeout in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation_mode: ValidationMode::Live,
            log_level: "info".to_string(),
            log_file: None,
            tick_rate_ms: 100,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".signup-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults when there is none
    pub fn load() -> anyhow::Result<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Config> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Config> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
    }

    #[test]
    fn test_parse_overrides() {
        let config = Config::parse(
            r#"{"validation_mode": "on_submit", "log_level": "debug", "log_file": "/tmp/signup.log"}"#,
        )
        .unwrap();
        assert_eq!(config.validation_mode, ValidationMode::OnSubmit);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/signup.log")));
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::parse("{not json").is_err());
        assert!(Config::parse(r#"{"validation_mode": "sometimes"}"#).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error_for_load_from() {
        let result = Config::load_from(Path::new("/definitely/not/here/config.json"));
        assert!(result.is_err());
    }
}
