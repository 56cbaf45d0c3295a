//! Configuration service.
//!
//! Loads `config.toml` from the config directory, applies the `REMITDESK_*`
//! environment overrides on top, and caches the result.

use crate::paths::RemitPaths;
use crate::storage::AtomicTomlFile;
use remitdesk_core::config::{AppConfig, EnvSettings};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Loads and caches the application configuration.
///
/// A missing file yields the defaults. A file that fails to parse is
/// reported with a warning and also yields the defaults, so a bad edit never
/// locks the operator out of the console.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &RemitPaths) -> Self {
        Self::from_file(paths.config_file())
    }

    pub fn from_file(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Configuration with environment overrides from the process environment.
    pub fn get_config(&self) -> AppConfig {
        self.get_config_with(|key| std::env::var(key).ok())
    }

    /// Configuration with environment overrides resolved through `lookup`.
    pub fn get_config_with<F>(&self, lookup: F) -> AppConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        {
            let cached = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(config) = cached.as_ref() {
                return config.clone();
            }
        }

        let loaded = self.load_file().with_overrides(lookup);

        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = Some(loaded.clone());
        loaded
    }

    pub fn env_settings(&self) -> EnvSettings {
        self.get_config().env_settings()
    }

    /// Drops the cached value so the next read goes back to disk.
    pub fn invalidate_cache(&self) {
        let mut cached = self.config.write().unwrap_or_else(|e| e.into_inner());
        *cached = None;
    }

    fn load_file(&self) -> AppConfig {
        match AtomicTomlFile::<AppConfig>::new(self.path.clone()).load() {
            Ok(Some(config)) => {
                tracing::debug!("Loaded config from {}", self.path.display());
                config
            }
            Ok(None) => AppConfig::default(),
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable config file {}: {}",
                    self.path.display(),
                    e
                );
                AppConfig::default()
            }
        }
    }
}
