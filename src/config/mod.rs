//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the rate API endpoint, the cache server, the base currency and
//! the colour theme.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::state::DEFAULT_BASE_CURRENCY;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/currency-tui";
const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/{base}";
const DEFAULT_CACHE_URL: &str = "redis://127.0.0.1:6379/";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub rates_url: String,
    pub cache_url: String,
    pub base_currency: String,
    pub log_level: String,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_rates_url")]
    pub rates_url: String,
    #[serde(default = "default_cache_url")]
    pub cache_url: String,
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_rates_url() -> String {
    DEFAULT_RATES_URL.to_string()
}

fn default_cache_url() -> String {
    DEFAULT_CACHE_URL.to_string()
}

fn default_base_currency() -> String {
    DEFAULT_BASE_CURRENCY.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_theme_name() -> String {
    "classic".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            rates_url: default_rates_url(),
            cache_url: default_cache_url(),
            base_currency: default_base_currency(),
            log_level: default_log_level(),
            theme_name: default_theme_name(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. If no file exists yet, the defaults are written
    /// to it.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.rates_url = data.rates_url;
            self.cache_url = data.cache_url;
            self.base_currency = data.base_currency.to_uppercase();
            self.log_level = data.log_level;
            self.theme_name = data.theme_name;
        } else {
            self.save()?;
        }

        self.validate()?;
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            rates_url: self.rates_url.clone(),
            cache_url: self.cache_url.clone(),
            base_currency: self.base_currency.clone(),
            log_level: self.log_level.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Return the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::InvalidValue {
            field: "log_level".to_string(),
            message: format!("unknown level '{}'", self.log_level),
        })
    }

    /// Return the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.rates_url.contains("{base}") {
            return Err(ConfigError::InvalidValue {
                field: "rates_url".to_string(),
                message: format!("'{}' has no {{base}} placeholder", self.rates_url),
            });
        }
        if self.base_currency.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_currency".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        self.log_level_filter()?;
        Ok(())
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(dir: &Path) -> Result<Config, AppError> {
        let mut config = Config::new();
        config.load(dir.to_str())?;
        Ok(config)
    }

    #[test]
    fn load_writes_defaults_when_missing() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let config = load_from(dir.path())?;

        assert_eq!(config.rates_url, DEFAULT_RATES_URL);
        assert_eq!(config.cache_url, DEFAULT_CACHE_URL);
        assert_eq!(config.base_currency, "USD");
        assert_eq!(config.theme_name, "classic");
        assert_eq!(config.file_path(), Some(dir.path().join(FILE_NAME).as_path()));

        let written = fs::read_to_string(dir.path().join(FILE_NAME))?;
        assert!(written.contains("cache_url"));
        assert!(written.contains("redis://127.0.0.1:6379/"));
        Ok(())
    }

    #[test]
    fn load_reads_existing_file() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join(FILE_NAME),
            "cache_url: redis://cache:6380/\nbase_currency: eur\nlog_level: debug\ntheme_name: dracula\n",
        )?;
        let config = load_from(dir.path())?;

        assert_eq!(config.cache_url, "redis://cache:6380/");
        assert_eq!(config.base_currency, "EUR");
        assert_eq!(config.rates_url, DEFAULT_RATES_URL);
        assert_eq!(config.log_level_filter()?, LevelFilter::Debug);
        assert_eq!(config.theme_name, "dracula");
        Ok(())
    }

    #[test]
    fn load_creates_missing_directory() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("nested").join("config");
        load_from(&nested)?;
        assert!(nested.join(FILE_NAME).exists());
        Ok(())
    }

    #[test]
    fn load_rejects_malformed_file() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join(FILE_NAME), "cache_url: [unclosed\n")?;
        let result = load_from(dir.path());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        Ok(())
    }

    #[test]
    fn load_rejects_url_without_placeholder() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        fs::write(
            dir.path().join(FILE_NAME),
            "rates_url: https://example.com/latest/USD\n",
        )?;
        let result = load_from(dir.path());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::InvalidValue { ref field, .. })) if field == "rates_url"
        ));
        Ok(())
    }

    #[test]
    fn unknown_log_level_is_invalid() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::new()
        };
        assert!(matches!(
            config.log_level_filter(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }
}
