#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! SMD Configuration
//!
//! This crate provides configuration management for SMD generation.
//! It handles loading, saving, and defaulting configuration files that specify:
//! - Document-level SMD defaults (envelope, transport, target, content type)
//! - Where the descriptor cache lives and how it writes
//! - Logging configuration
//!
//! Configuration is stored in TOML format. Values are plain strings here;
//! they are validated when applied to a service map.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Document-level SMD defaults
    #[serde(default)]
    pub smd: SmdConfig,
    /// Descriptor cache settings
    #[serde(default)]
    pub cache: CacheConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Document-level defaults applied to new service maps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmdConfig {
    /// Default envelope ("JSON-RPC-1.0" or "JSON-RPC-2.0")
    #[serde(default = "default_envelope")]
    pub envelope: String,
    /// Default transport ("POST")
    #[serde(default = "default_transport")]
    pub transport: String,
    /// Default target endpoint (optional)
    pub target: Option<String>,
    /// Content type advertised by the document
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Document id (optional)
    pub id: Option<String>,
    /// Document description (optional)
    pub description: Option<String>,
}

/// Descriptor cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Where the cached SMD JSON is stored
    #[serde(default = "default_cache_location")]
    pub location: PathBuf,
    /// Write through a temporary file and rename
    #[serde(default)]
    pub atomic_writes: bool,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,
    /// Log file path (optional)
    pub file: Option<PathBuf>,
}

fn default_envelope() -> String { "JSON-RPC-1.0".to_string() }

fn default_transport() -> String { "POST".to_string() }

fn default_content_type() -> String { "application/json".to_string() }

fn default_cache_location() -> PathBuf { PathBuf::from("smd.json") }

fn default_level() -> String { "info".to_string() }

impl Default for SmdConfig {
    fn default() -> Self {
        Self {
            envelope: default_envelope(),
            transport: default_transport(),
            target: None,
            content_type: default_content_type(),
            id: None,
            description: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self { Self { location: default_cache_location(), atomic_writes: false } }
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: default_level(), file: None } }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/smd/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("smd");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the config at `path` if given, otherwise the default path if it
    /// exists, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.is_file() => Self::from_file(default),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let toml_content = r#"
            [smd]
            envelope = "JSON-RPC-2.0"
            transport = "POST"
            target = "/json-rpc"
            id = "urn:calc"

            [cache]
            location = "/var/cache/calc/smd.json"
            atomic_writes = true

            [logging]
            level = "debug"
            file = "smd.log"
        "#;
        fs::write(&temp_file, toml_content)
            .expect("Failed to write TOML content to temporary file");

        let config =
            Config::from_file(&temp_file).expect("Failed to load config from temporary file");
        assert_eq!(config.smd.envelope, "JSON-RPC-2.0");
        assert_eq!(config.smd.target, Some("/json-rpc".to_string()));
        assert_eq!(config.smd.content_type, "application/json");
        assert_eq!(config.smd.id, Some("urn:calc".to_string()));
        assert_eq!(config.smd.description, None);
        assert_eq!(config.cache.location, PathBuf::from("/var/cache/calc/smd.json"));
        assert!(config.cache.atomic_writes);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("smd.log")));

        // Test file not found error
        let result = Config::from_file("nonexistent_file.toml");
        match result.expect_err("Expected error for nonexistent file") {
            ConfigError::FileRead(_) => {}
            other => panic!("Expected FileRead error, got {:?}", other),
        }

        // Test parse error
        let temp_file =
            NamedTempFile::new().expect("Failed to create temporary file for parse error test");
        fs::write(&temp_file, "invalid toml content")
            .expect("Failed to write invalid TOML content");
        match Config::from_file(&temp_file).expect_err("Expected parse error for invalid TOML") {
            ConfigError::Parse(_) => {}
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&temp_file, "[cache]\nlocation = \"cache/smd.json\"\n")
            .expect("Failed to write TOML content");

        let config = Config::from_file(&temp_file).expect("Failed to load partial config");
        assert_eq!(config.cache.location, PathBuf::from("cache/smd.json"));
        assert!(!config.cache.atomic_writes);
        assert_eq!(config.smd, SmdConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_save() {
        let config = Config::default();
        let temp_file =
            NamedTempFile::new().expect("Failed to create temporary file for save test");

        config.save(&temp_file).expect("Failed to save config");
        let contents = fs::read_to_string(&temp_file).expect("Failed to read saved config file");
        assert!(contents.contains("JSON-RPC-1.0"));
        assert!(contents.contains("smd.json"));
        assert_eq!(Config::from_file(&temp_file).expect("Failed to reload config"), config);

        // Saving into a missing directory surfaces the I/O error
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let missing = temp_dir.path().join("nonexistent").join("config.toml");
        match config.save(&missing).expect_err("Expected write error for missing directory") {
            ConfigError::FileRead(_) => (),
            other => panic!("Expected FileRead error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path().expect("Failed to get default config path");
        let path_str = path.to_str().expect("Path should be valid UTF-8");
        assert!(path_str.ends_with("config.toml"));
        assert!(path_str.contains("smd"));
    }

    #[test]
    fn test_load_or_default() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(&temp_file, "[logging]\nlevel = \"warn\"\n").expect("Failed to write TOML");
        let config = Config::load_or_default(Some(temp_file.path())).expect("Failed to load config");
        assert_eq!(config.logging.level, "warn");

        let missing = Config::load_or_default(Some(Path::new("nonexistent_file.toml")));
        assert!(missing.is_err());
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.smd.envelope, "JSON-RPC-1.0");
        assert_eq!(config.smd.transport, "POST");
        assert_eq!(config.smd.target, None);
        assert_eq!(config.smd.content_type, "application/json");
        assert_eq!(config.cache.location, PathBuf::from("smd.json"));
        assert!(!config.cache.atomic_writes);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file, None);
    }
}
