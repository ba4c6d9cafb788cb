use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const APP_DIR_NAME: &str = "videoshelf";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_CATALOG_PATH: &str = "videos.txt";
pub const DEFAULT_PROMPT: &str = "YT> ";

pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

pub fn get_config_file_path() -> PathBuf {
    get_config_dir().join(CONFIG_FILE_NAME)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pipe-delimited catalog read once at startup.
    pub catalog_path: PathBuf,
    pub prompt: String,
    /// Fixed seed for PLAY_RANDOM, for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            prompt: DEFAULT_PROMPT.to_string(),
            seed: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads an explicitly requested file, failing if it can't be used.
    /// Without one, falls back to the per-user file and then to defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = get_config_file_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        match Self::load(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring config file: {:#}", e);
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog_path, PathBuf::from("videos.txt"));
        assert_eq!(config.prompt, "YT> ");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "catalog_path": "/data/videos.txt", "seed": 3 }}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.catalog_path, PathBuf::from("/data/videos.txt"));
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_explicit_file_errors_are_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Config::resolve(Some(file.path())).is_err());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = Config::resolve(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
