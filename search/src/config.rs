use crate::scanner::ScanOptions;
use serde::{Deserialize, Serialize};
use sift_core::SearchOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// User-facing configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub search: SearchOptions,
    #[serde(default)]
    pub scan: ScanOptions,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl SiftConfig {
    /// Returns the config file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.general.log_level.as_str()) {
            errors.push(format!(
                "log_level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.general.log_level
            ));
        }

        if self.search.tuning.long_keyword_divisor == 0 {
            errors.push("long_keyword_divisor must be at least 1".to_string());
        }

        if self.search.tuning.prefilter_divisor == 0 {
            errors.push("prefilter_divisor must be at least 1".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let mut config = self.clone();

        if !LOG_LEVELS.contains(&config.general.log_level.as_str()) {
            config.general.log_level = defaults.general.log_level;
        }
        if config.search.tuning.long_keyword_divisor == 0 {
            config.search.tuning.long_keyword_divisor = defaults.search.tuning.long_keyword_divisor;
        }
        if config.search.tuning.prefilter_divisor == 0 {
            config.search.tuning.prefilter_divisor = defaults.search.tuning.prefilter_divisor;
        }

        config
    }
}

/// General settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Root scanned when a file search has no directory and the cache is empty.
    #[serde(default = "default_root")]
    pub default_root: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_root: default_root(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\")
    } else {
        PathBuf::from("/")
    }
}

/// Where the path cache and search history live.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// When false, nothing is read from or written to `data_dir`.
    #[serde(default = "default_true")]
    pub persist: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            persist: true,
        }
    }
}

impl StorageConfig {
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("file_cache.bin")
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("search_history.json")
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".sift")
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
