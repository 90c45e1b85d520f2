//! Runtime configuration: defaults, an optional TOML file, then environment.
//!
//! Command-line overrides are applied by the caller on the returned
//! [`Config`], giving the precedence defaults < file < env < flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use swapi_api::BaseUrl;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_OUT_DIR: &str = "data";
/// Looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "swapi.toml";

pub const ENV_BASE_URL: &str = "SWAPI_BASE_URL";
pub const ENV_OUT_DIR: &str = "SWAPI_OUT_DIR";
pub const ENV_TIMEOUT_SECS: &str = "SWAPI_TIMEOUT_SECS";

const KNOWN_KEYS: &[&str] = &["base_url", "out_dir", "timeout_secs"];

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
    #[error(transparent)]
    BaseUrl(#[from] swapi_api::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: BaseUrl,
    pub out_dir: PathBuf,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BaseUrl::new(DEFAULT_BASE_URL),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            timeout: None,
        }
    }
}

impl Config {
    /// Loads defaults, then the config file, then the process environment.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// is read only if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let file = match path {
            Some(p) => Some(p.to_path_buf()),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                p.is_file().then_some(p)
            }
        };
        if let Some(file) = file {
            let contents =
                std::fs::read_to_string(&file).map_err(|source| ConfigError::Read {
                    path: file.clone(),
                    source,
                })?;
            config.apply_toml(&contents)?;
            tracing::debug!("Loaded config from {}", file.display());
        }

        config.apply_env()?;
        Ok(config)
    }

    /// Overlays the keys present in a TOML document.
    ///
    /// `base_url` must be a string ([`swapi_api::Error::InvalidUrlType`]
    /// otherwise). Unknown keys are ignored with a warning.
    pub fn apply_toml(&mut self, contents: &str) -> Result<(), ConfigError> {
        let doc: Value =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        let Value::Object(table) = doc else {
            return Err(ConfigError::Parse("expected a table".to_string()));
        };

        for key in table.keys().filter(|k| !KNOWN_KEYS.contains(&k.as_str())) {
            tracing::warn!("Ignoring unknown config key '{}'", key);
        }

        if let Some(value) = table.get("base_url") {
            self.base_url = BaseUrl::try_from(value)?;
        }
        if let Some(value) = table.get("out_dir") {
            match value {
                Value::String(dir) => self.out_dir = PathBuf::from(dir),
                other => {
                    return Err(invalid(
                        "out_dir",
                        format!("expected a string, got {}", other),
                    ))
                }
            }
        }
        if let Some(value) = table.get("timeout_secs") {
            let secs = value.as_u64().ok_or_else(|| {
                invalid(
                    "timeout_secs",
                    format!("expected a non-negative integer, got {}", value),
                )
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(())
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlays environment values read through `lookup`. Empty values are skipped.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = BaseUrl::new(&url);
        }
        if let Some(dir) = get(ENV_OUT_DIR) {
            self.out_dir = PathBuf::from(dir);
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid(ENV_TIMEOUT_SECS, format!("'{}': {}", raw, e)))?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: String) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    }
}
