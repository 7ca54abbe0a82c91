//! Configuration management for petreg.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "petreg";

/// Default record collection file name.
const RECORDS_FILE_NAME: &str = "records.json";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PETREG_`)
/// 2. TOML config file at `~/.config/petreg/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Admin console configuration.
    pub admin: AdminConfig,
    /// Export configuration.
    pub export: ExportConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the record collection file.
    /// Defaults to `~/.local/share/petreg/records.json`
    pub database_path: Option<PathBuf>,
}

/// Admin console credentials.
///
/// A single shared username/password pair checked by equality. Anyone
/// with access to the configuration has the credentials; this is not a
/// security boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// Export-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory CSV exports are written into.
    /// Defaults to the current working directory.
    pub directory: Option<PathBuf>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "login".to_string(),
            password: "login".to_string(),
        }
    }
}

impl AdminConfig {
    /// Check the supplied credentials against the configured pair.
    #[must_use]
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `PETREG_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("PETREG_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.admin.username.is_empty() {
            return Err(Error::ConfigValidation {
                message: "admin.username must not be empty".to_string(),
            });
        }

        if self.admin.password.is_empty() {
            return Err(Error::ConfigValidation {
                message: "admin.password must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Get the record collection path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(RECORDS_FILE_NAME))
    }

    /// Get the export directory, resolving defaults if not set.
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.database_path.is_none());
        assert_eq!(config.admin.username, "login");
        assert_eq!(config.admin.password, "login");
        assert!(config.export.directory.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_username() {
        let mut config = Config::default();
        config.admin.username = String::new();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("admin.username"));
    }

    #[test]
    fn test_validate_empty_password() {
        let mut config = Config::default();
        config.admin.password = String::new();

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("admin.password"));
    }

    #[test]
    fn test_admin_verify() {
        let admin = AdminConfig::default();

        assert!(admin.verify("login", "login"));
        assert!(!admin.verify("login", "wrong"));
        assert!(!admin.verify("admin", "login"));
        assert!(!admin.verify("", ""));
    }

    #[test]
    fn test_admin_verify_custom_credentials() {
        let admin = AdminConfig {
            username: "keeper".to_string(),
            password: "s3cret".to_string(),
        };

        assert!(admin.verify("keeper", "s3cret"));
        assert!(!admin.verify("login", "login"));
    }

    #[test]
    fn test_database_path_default() {
        let config = Config::default();
        let path = config.database_path();

        assert!(path.to_string_lossy().contains("records.json"));
        assert!(path.to_string_lossy().contains("petreg"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/custom/path/pets.json"));

        assert_eq!(config.database_path(), PathBuf::from("/custom/path/pets.json"));
    }

    #[test]
    fn test_export_dir_default() {
        let config = Config::default();
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_export_dir_custom() {
        let mut config = Config::default();
        config.export.directory = Some(PathBuf::from("/exports"));

        assert_eq!(config.export_dir(), PathBuf::from("/exports"));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("petreg"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("database_path"));
        assert!(json.contains("username"));
    }

    #[test]
    fn test_admin_config_deserialize() {
        let json = r#"{"username": "keeper", "password": "s3cret"}"#;
        let admin: AdminConfig = serde_json::from_str(json).unwrap();
        assert_eq!(admin.username, "keeper");
        assert_eq!(admin.password, "s3cret");
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
