//! Configuration management
//!
//! Optional TOML file; every field has a default so a missing file or a
//! partial file is fine. Priority: CLI argument > config.toml > default.

use super::Result;
use crate::error::ConfigError;
use crate::utils::validation::{validate_suffix, validate_url};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub listing: ListingSettings,
    pub fetch: FetchSettings,
    pub demo: DemoSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ListingSettings {
    /// File-name suffix matched by `ls`
    pub suffix: String,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            suffix: crate::core::workspace::PYTHON_SUFFIX.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FetchSettings {
    pub url: String,
    pub byte_count: usize,
    /// Unset means the HTTP client's own default
    pub timeout_seconds: Option<u64>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            url: "https://www.example.com".to_string(),
            byte_count: 100,
            timeout_seconds: None,
        }
    }
}

impl FetchSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoSettings {
    pub sample_text: String,
    pub sample_data: Vec<f64>,
    pub compress_text: String,
    pub compress_repeat: usize,
    pub snippet: String,
    pub repetitions: u64,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            sample_text: "The price is $42.99 and the quantity is 5, so the total is $214.95."
                .to_string(),
            sample_data: vec![12.0, 15.0, 18.0, 22.0, 25.0, 28.0, 30.0],
            compress_text: "This is a test string to compress. ".to_string(),
            compress_repeat: 10,
            snippet: "squares".to_string(),
            repetitions: 1000,
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults if it does not exist
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: format!("Failed to parse {}: {}", config_path.display(), e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load `<dir>/config.toml` when a directory is given, else the default location
    pub fn load_from_dir(dir: Option<&Path>) -> Result<Self> {
        Self::load(dir.map(|d| d.join(CONFIG_FILE_NAME)))
    }

    pub fn validate(&self) -> Result<()> {
        validate_suffix(&self.listing.suffix).map_err(|reason| ConfigError::InvalidValue {
            field: "listing.suffix".to_string(),
            value: self.listing.suffix.clone(),
            reason,
        })?;

        validate_url(&self.fetch.url).map_err(|e| ConfigError::InvalidValue {
            field: "fetch.url".to_string(),
            value: self.fetch.url.clone(),
            reason: e.to_string(),
        })?;

        if self.demo.repetitions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "demo.repetitions".to_string(),
                value: "0".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            message: format!("Failed to serialize config: {}", e),
        })
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::DirNotFound)?;
        Ok(config_dir.join("stdtour").join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.listing.suffix, ".py");
        assert_eq!(config.fetch.byte_count, 100);
        assert!(config.fetch.timeout().is_none());
        assert_eq!(config.demo.repetitions, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("config.toml")))
            .expect("missing file is not an error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[listing]\nsuffix = \".rs\"\n\n[fetch]\ntimeout_seconds = 5\n",
        )
        .expect("Failed to write config");

        let config = Config::load_from_dir(Some(temp_dir.path())).expect("Failed to load config");
        assert_eq!(config.listing.suffix, ".rs");
        assert_eq!(config.fetch.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.fetch.url, "https://www.example.com");
        assert_eq!(config.demo, DemoSettings::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[listing\nsuffix = ").expect("Failed to write config");

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "[fetch]\nurl = \"ftp://example.com\"\n")
            .expect("Failed to write config");

        match Config::load(Some(config_path)) {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "fetch.url"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_repetitions_invalid() {
        let mut config = Config::default();
        config.demo.repetitions = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = Config::default();
        let text = config.to_toml().expect("serializable");
        let parsed: Config = toml::from_str(&text).expect("parsable");
        assert_eq!(parsed, config);
    }
}
