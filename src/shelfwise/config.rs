use crate::error::{Result, ShelfwiseError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "inventory.json";
const DEFAULT_NAME_WIDTH: usize = 30;
const MIN_NAME_WIDTH: usize = 4;

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "SHELFWISE_HOME";

/// Keys accepted by [`ShelfwiseConfig::get`] and [`ShelfwiseConfig::set`], in display order.
pub const KEYS: &[&str] = &["data-file", "sort-by-name", "name-width"];

/// Configuration for shelfwise, stored as `config.json` in the home directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ShelfwiseConfig {
    /// Database file name, relative to the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Whether listings are sorted by name unless asked otherwise
    #[serde(default)]
    pub sort_by_name: bool,

    /// Display width names are truncated to
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

impl Default for ShelfwiseConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            sort_by_name: false,
            name_width: DEFAULT_NAME_WIDTH,
        }
    }
}

impl ShelfwiseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfwiseError::Io)?;
        serde_json::from_str(&content)
            .map_err(|e| ShelfwiseError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfwiseError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content =
            serde_json::to_string_pretty(self).map_err(ShelfwiseError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfwiseError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "sort-by-name" => Some(self.sort_by_name.to_string()),
            "name-width" => Some(self.name_width.to_string()),
            _ => None,
        }
    }

    /// Like [`ShelfwiseConfig::get`], but an unknown key is a [`ShelfwiseError::Config`].
    pub fn value(&self, key: &str) -> Result<String> {
        self.get(key).ok_or_else(|| unknown_key(key))
    }

    /// Parses `value` into `key`. On error the config is left as it was.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "data-file" => {
                if value.is_empty() {
                    return Err(invalid(key, "cannot be empty"));
                }
                self.data_file = value.to_string();
            }
            "sort-by-name" => {
                self.sort_by_name = match value.to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(invalid(key, &format!("\"{}\" is not a boolean", other))),
                }
            }
            "name-width" => {
                let width: usize = value
                    .parse()
                    .map_err(|_| invalid(key, &format!("\"{}\" is not a width", value)))?;
                if width < MIN_NAME_WIDTH {
                    return Err(invalid(key, &format!("must be at least {}", MIN_NAME_WIDTH)));
                }
                self.name_width = width;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// `(key, value)` for every key, in [`KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn unknown_key(key: &str) -> ShelfwiseError {
    ShelfwiseError::Config(format!("Unknown config key: {}", key))
}

fn invalid(key: &str, reason: &str) -> ShelfwiseError {
    ShelfwiseError::Config(format!("{} {}", key, reason))
}

/// Where shelfwise keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfwisePaths {
    pub home: PathBuf,
}

impl ShelfwisePaths {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// `$SHELFWISE_HOME` if set, otherwise the platform data directory.
    pub fn resolve() -> Result<Self> {
        if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(home));
        }
        let dirs = ProjectDirs::from("com", "shelfwise", "shelfwise").ok_or_else(|| {
            ShelfwiseError::Config("Could not determine data directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir()))
    }

    pub fn data_file(&self, config: &ShelfwiseConfig) -> PathBuf {
        self.home.join(&config.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ShelfwiseConfig::default();
        assert_eq!(config.data_file, "inventory.json");
        assert!(!config.sort_by_name);
        assert_eq!(config.name_width, 30);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = ShelfwiseConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, ShelfwiseConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = ShelfwiseConfig::default();
        config.set("sort-by-name", "yes").unwrap();
        config.set("name-width", "12").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = ShelfwiseConfig::load(dir.path()).unwrap();
        assert!(loaded.sort_by_name);
        assert_eq!(loaded.name_width, 12);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"name-width": 40}"#).unwrap();
        let loaded = ShelfwiseConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.name_width, 40);
        assert_eq!(loaded.data_file, "inventory.json");
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();
        let err = ShelfwiseConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, ShelfwiseError::Config(_)));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = ShelfwiseConfig::default();
        assert!(config.set("sort-by-name", "maybe").is_err());
        assert!(config.set("name-width", "wide").is_err());
        assert!(config.set("name-width", "2").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert_eq!(
            config.set("colour", "red").unwrap_err().to_string(),
            "Config error: Unknown config key: colour"
        );
        assert_eq!(
            config.set("name-width", "2").unwrap_err().to_string(),
            "Config error: name-width must be at least 4"
        );
        assert_eq!(config, ShelfwiseConfig::default());
        assert!(matches!(config.value("colour"), Err(ShelfwiseError::Config(_))));
    }

    #[test]
    fn test_entries_follow_key_order() {
        let keys: Vec<&str> = ShelfwiseConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS);
    }

    #[test]
    fn test_data_file_is_inside_home() {
        let paths = ShelfwisePaths::new("/tmp/inv");
        let mut config = ShelfwiseConfig::default();
        config.set("data-file", "garage.json").unwrap();
        assert_eq!(paths.data_file(&config), PathBuf::from("/tmp/inv/garage.json"));
    }
}
