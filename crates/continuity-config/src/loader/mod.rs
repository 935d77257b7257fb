//! Config loading: JSON5 file, then environment overrides, then validation.

pub mod env_vars;


use crate::{ConfigError, ContinuityConfig};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Config filename looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "continuity.json5";

/// Options controlling where config is read from.
#[derive(Debug, Clone)]
pub struct ConfigLoadOptions {
    /// Directory searched for `continuity.json5` when no explicit path is set.
    pub cwd: PathBuf,
    /// Explicit config file; must exist when set.
    pub config_path: Option<PathBuf>,
}

impl ConfigLoadOptions {
    /// Default options for the provided working directory.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        Self {
            cwd: cwd.as_ref().to_path_buf(),
            config_path: None,
        }
    }

    /// Read config from an explicit file instead of the cwd default.
    pub fn with_config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl ContinuityConfig {
    /// Load a single config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a single config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Resolve the effective config: file (explicit or cwd default, else
    /// built-in defaults), then environment overrides from `lookup`, then
    /// validation.
    pub fn load<F>(options: &ConfigLoadOptions, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &options.config_path {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let path = options.cwd.join(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load_from_path(path)?
                } else {
                    debug!(
                        "no config file found, using defaults (cwd={})",
                        options.cwd.display()
                    );
                    Self::default()
                }
            }
        };
        config.apply_env_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay values from environment variables onto this config.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(env_vars::HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(env_vars::PORT) {
            self.server.port = parse_env(env_vars::PORT, &port)?;
        }
        if let Some(path) = lookup(env_vars::MEMORY_PATH) {
            self.memory.path = path;
        }
        if let Some(model) = lookup(env_vars::MODEL) {
            self.provider.model = model;
        }
        if let Some(timeout) = lookup(env_vars::PROVIDER_TIMEOUT_SECS) {
            self.provider.timeout_secs = Some(parse_env(env_vars::PROVIDER_TIMEOUT_SECS, &timeout)?);
        }
        Ok(())
    }

    /// Validate configuration invariants that cannot be expressed in serde.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("server.host", &self.server.host),
            ("memory.path", &self.memory.path),
            ("provider.model", &self.provider.model),
            ("provider.endpoint", &self.provider.endpoint),
            ("provider.api_key_env", &self.provider.api_key_env),
        ];
        for (path, value) in required {
            if value.trim().is_empty() {
                return Err(invalid(path, "cannot be empty"));
            }
        }
        if self.server.port == 0 {
            return Err(invalid("server.port", "must be between 1 and 65535"));
        }
        if self.provider.timeout_secs == Some(0) {
            return Err(invalid("provider.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Read the provider API key from the variable named by `provider.api_key_env`.
    pub fn api_key<F>(&self, lookup: F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&self.provider.api_key_env)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnv(self.provider.api_key_env.clone()))
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| invalid(name, &format!("cannot parse {raw:?}")))
}

fn invalid(path: &str, message: &str) -> ConfigError {
    ConfigError::InvalidField {
        path: path.to_string(),
        message: message.to_string(),
    }
}
