//! Application configuration management.
//!
//! Holds the storage backend used for the session record, the simulated
//! login latency and the last email used to sign in.
//!
//! Configuration is stored at `~/.config/airaware/config.json`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::session::DEFAULT_LATENCY_MS;
use crate::auth::{SessionStorage, StorageBackend};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "airaware";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageBackend,
    pub simulated_latency_ms: u64,
    pub last_email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            simulated_latency_ms: DEFAULT_LATENCY_MS,
            last_email: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::cache_dir()?.join("logs"))
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// Open the configured session storage, falling back to `./cache` for
    /// the file backend when no cache directory is known
    pub fn open_storage(&self) -> Box<dyn SessionStorage> {
        let dir = Self::cache_dir().unwrap_or_else(|_| PathBuf::from("./cache"));
        self.storage.open(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"last_email": "a@b.com"}"#).unwrap();
        assert_eq!(config.storage, StorageBackend::File);
        assert_eq!(config.latency(), Duration::from_millis(1000));
        assert_eq!(config.last_email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = serde_json::from_str(
            r#"{"storage": "memory", "simulated_latency_ms": 0, "last_email": null}"#,
        )
        .unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.latency().is_zero());
        assert!(config.last_email.is_none());
    }
}
