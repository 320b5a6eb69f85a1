//! # Configuration
//!
//! Settings for the catalog runtime. Resolution order: built-in defaults, then an optional
//! TOML file, then `CATALOG_*` environment variables, then validation.
//!
//! ```toml
//! latency_ms = 500
//! default_page_size = 8
//! channel_buffer = 32
//! seed_demo_catalog = true
//! log_level = "info"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::framework::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Artificial delay applied to every catalog reply. 0 disables it.
    pub latency_ms: u64,
    /// Page size used when a listing request does not give one.
    pub default_page_size: u32,
    /// Capacity of the catalog actor's request channel.
    pub channel_buffer: usize,
    /// Load the twelve-product demo catalog at startup.
    pub seed_demo_catalog: bool,
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            default_page_size: DEFAULT_PAGE_SIZE,
            channel_buffer: 32,
            seed_demo_catalog: true,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// File contents; absent keys keep the current value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    latency_ms: Option<u64>,
    default_page_size: Option<u32>,
    channel_buffer: Option<usize>,
    seed_demo_catalog: Option<bool>,
    log_level: Option<String>,
}

impl CatalogConfig {
    /// Loads configuration from `path` (if given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = path {
            config.apply_patch(read_patch(path)?);
        }
        config.apply_env_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document on top of the defaults, without consulting the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let patch: ConfigPatch = toml::from_str(contents).map_err(|source| ConfigError::ParseFile {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        let mut config = Self::default();
        config.apply_patch(patch);
        config.validate()?;
        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(latency_ms) = patch.latency_ms {
            self.latency_ms = latency_ms;
        }
        if let Some(default_page_size) = patch.default_page_size {
            self.default_page_size = default_page_size;
        }
        if let Some(channel_buffer) = patch.channel_buffer {
            self.channel_buffer = channel_buffer;
        }
        if let Some(seed_demo_catalog) = patch.seed_demo_catalog {
            self.seed_demo_catalog = seed_demo_catalog;
        }
        if let Some(log_level) = patch.log_level {
            self.log_level = log_level;
        }
    }

    fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(value) = read("CATALOG_LATENCY_MS") {
            self.latency_ms = parse_env("CATALOG_LATENCY_MS", &value)?;
        }
        if let Some(value) = read("CATALOG_PAGE_SIZE") {
            self.default_page_size = parse_env("CATALOG_PAGE_SIZE", &value)?;
        }
        if let Some(value) = read("CATALOG_CHANNEL_BUFFER") {
            self.channel_buffer = parse_env("CATALOG_CHANNEL_BUFFER", &value)?;
        }
        if let Some(value) = read("CATALOG_SEED") {
            self.seed_demo_catalog = parse_bool("CATALOG_SEED", &value)?;
        }
        if let Some(value) = read("CATALOG_LOG_LEVEL") {
            self.log_level = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::Validation(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.channel_buffer == 0 {
            return Err(ConfigError::Validation(
                "channel_buffer must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnvOverride {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
