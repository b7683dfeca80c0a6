//! Configuration management with YAML support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Where the document and exports live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_path")]
    pub data_path: String,

    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

// Default value functions
fn default_data_path() -> String {
    "~/.local/share/steady/journal.json".to_string()
}

fn default_export_dir() -> String {
    "~/.local/share/steady/exports".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            export_dir: default_export_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    /// Searches in order:
    /// 1. Provided path
    /// 2. ./steady.yaml (current directory)
    /// 3. ~/.config/steady/steady.yaml
    pub fn load(path: &str) -> Result<Self> {
        let search_paths = vec![
            shellexpand::tilde(path).to_string(),
            "steady.yaml".to_string(),
            shellexpand::tilde("~/.config/steady/steady.yaml").to_string(),
        ];

        for search_path in &search_paths {
            if std::path::Path::new(search_path).exists() {
                let content = std::fs::read_to_string(search_path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        // No config file found, use defaults
        Ok(Config::default())
    }

    /// Get the document path, expanding ~ to home directory
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.storage.data_path).to_string();
        PathBuf::from(expanded)
    }

    /// Get the export directory, expanding ~ to home directory
    pub fn export_dir(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.storage.export_dir).to_string();
        PathBuf::from(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.data_path, "~/.local/share/steady/journal.json");
        assert_eq!(config.storage.export_dir, "~/.local/share/steady/exports");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
storage:
  data_path: /tmp/steady-test/journal.json
  export_dir: /tmp/steady-test/exports
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.data_path(), PathBuf::from("/tmp/steady-test/journal.json"));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/steady-test/exports"));
    }

    #[test]
    fn test_partial_yaml_takes_defaults() {
        let yaml = r#"
storage:
  data_path: ./journal.json
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.storage.data_path, "./journal.json");
        assert_eq!(config.storage.export_dir, "~/.local/share/steady/exports");
    }

    #[test]
    fn test_tilde_expansion() {
        let config = Config::default();
        if dirs::home_dir().is_some() {
            assert!(!config.data_path().to_string_lossy().starts_with('~'));
        }
    }
}
