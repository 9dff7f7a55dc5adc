//! Application configuration
//!
//! Loaded from `.todo-lander.toml` in the working directory, or from
//! `config.toml` in the todo-lander config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths::Locations;

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Prompt printed in front of the add-todo input
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Longest todo text accepted, in characters
    #[serde(default = "default_max_todo_length")]
    pub max_todo_length: usize,

    /// Maximum number of actions a single dispatch may cascade into
    #[serde(default = "default_max_cascade")]
    pub max_cascade: usize,
}

fn default_prompt() -> String {
    "add todo> ".to_string()
}

fn default_max_todo_length() -> usize {
    280
}

fn default_max_cascade() -> usize {
    64
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            max_todo_length: default_max_todo_length(),
            max_cascade: default_max_cascade(),
        }
    }
}

impl AppConfig {
    /// Load config from the working directory, then the config dir, or use defaults
    pub fn load() -> Self {
        Self::load_from(&Locations::discover())
    }

    /// Load the first config file that exists in `locations`
    ///
    /// A file that exists but does not parse is not skipped in favour of a
    /// lower priority one: defaults are used and the problem is logged.
    pub fn load_from(locations: &Locations) -> Self {
        let Some(path) = locations
            .config_candidates()
            .into_iter()
            .find(|path| path.exists())
        else {
            log::debug!("No config file found, using default app config");
            return Self::default();
        };

        match Self::load_from_path(&path) {
            Ok(config) => {
                log::info!("Loaded app config from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Using default app config: {:#}", e);
                Self::default()
            }
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.prompt, "add todo> ");
        assert_eq!(config.max_todo_length, 280);
        assert_eq!(config.max_cascade, 64);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            prompt = "> "
            max_todo_length = 40
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.max_todo_length, 40);
        // max_cascade should use default
        assert_eq!(config.max_cascade, 64);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_local_config_wins() {
        let local = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        write(local.path(), ".todo-lander.toml", "max_todo_length = 10");
        write(global.path(), "config.toml", "max_todo_length = 20");

        let locations = Locations::new(local.path(), Some(global.path().to_path_buf()));
        assert_eq!(AppConfig::load_from(&locations).max_todo_length, 10);
    }

    #[test]
    fn test_global_config_when_no_local() {
        let local = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        write(global.path(), "config.toml", "prompt = \"todo: \"");

        let locations = Locations::new(local.path(), Some(global.path().to_path_buf()));
        let config = AppConfig::load_from(&locations);
        assert_eq!(config.prompt, "todo: ");
        assert_eq!(config.max_todo_length, 280);
    }

    #[test]
    fn test_defaults_when_no_file() {
        let local = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();

        let locations = Locations::new(local.path(), Some(global.path().to_path_buf()));
        assert_eq!(AppConfig::load_from(&locations), AppConfig::default());
        assert_eq!(
            AppConfig::load_from(&Locations::new(local.path(), None)),
            AppConfig::default()
        );
    }

    #[test]
    fn test_corrupt_local_config_falls_back_to_defaults() {
        let local = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();
        write(local.path(), ".todo-lander.toml", "max_todo_length = \"lots\"");
        write(global.path(), "config.toml", "max_todo_length = 20");

        let locations = Locations::new(local.path(), Some(global.path().to_path_buf()));
        assert_eq!(AppConfig::load_from(&locations), AppConfig::default());
    }
}
