use std::path::Path;

use thiserror::Error;

use super::types::{default_bindings, Config, LogConfig, NamingConfig, StorageConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Missing setting: {0}")]
    Missing(String),
}

impl Config {
    /// Merge two configs, with `other` taking precedence
    ///
    /// Bindings accumulate: `other`'s come first so they win in dispatch.
    pub fn merge(self, other: Config) -> Config {
        let mut bindings = other.bindings;
        bindings.extend(self.bindings);

        Config {
            naming: NamingConfig {
                endpoint: other.naming.endpoint.or(self.naming.endpoint),
                fallback_name: other.naming.fallback_name.or(self.naming.fallback_name),
                timeout_secs: other.naming.timeout_secs.or(self.naming.timeout_secs),
            },
            storage: StorageConfig {
                backend: other.storage.backend.or(self.storage.backend),
                path: other.storage.path.or(self.storage.path),
                url: other.storage.url.or(self.storage.url),
                table: other.storage.table.or(self.storage.table),
                key_env: other.storage.key_env.or(self.storage.key_env),
                timeout_secs: other.storage.timeout_secs.or(self.storage.timeout_secs),
            },
            log: LogConfig {
                level: other.log.level.or(self.log.level),
                file: other.log.file.or(self.log.file),
            },
            bindings,
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Append the built-in bindings after any user bindings
    pub fn with_default_bindings(mut self) -> Config {
        self.bindings.extend(default_bindings());
        self
    }

    /// Load global and local configs
    pub fn load() -> Result<Config, ConfigError> {
        load_config()
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Config::from_toml(&content)
}

/// Load global config from ~/.config/swatchbook/config.toml
fn load_global_config() -> Result<Option<Config>, ConfigError> {
    let config_path = dirs::config_dir().map(|p| p.join("swatchbook").join("config.toml"));

    if let Some(path) = config_path {
        if path.exists() {
            return read_config(&path).map(Some);
        }
    }

    Ok(None)
}

/// Load local config from .swatchbook/config.toml in the current directory or parent directories
pub fn load_local_config(start_path: &Path) -> Result<Option<Config>, ConfigError> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(".swatchbook").join("config.toml");
        if config_path.exists() {
            return read_config(&config_path).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge configs (global + local), then add default bindings
pub fn load_config() -> Result<Config, ConfigError> {
    let current_dir = std::env::current_dir()?;

    let global = load_global_config()?.unwrap_or_default();
    let local = load_local_config(&current_dir)?.unwrap_or_default();

    Ok(global.merge(local).with_default_bindings())
}
