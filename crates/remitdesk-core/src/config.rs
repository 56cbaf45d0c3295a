//! Application configuration and the simulation switch.
//!
//! [`AppConfig`] is what gets read from `config.toml` and the environment.
//! [`EnvSettings`] is the flattened view the rest of the workspace consults;
//! its [`EnvSettings::should_use_mock_service`] decides whether auth and data
//! calls are served by the simulators or by the configured backend.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub const ENV_API_URL: &str = "REMITDESK_API_URL";
pub const ENV_USE_MOCK_SERVICES: &str = "REMITDESK_USE_MOCK_SERVICES";
pub const ENV_MODE: &str = "REMITDESK_MODE";
pub const ENV_API_TIMEOUT_SECS: &str = "REMITDESK_API_TIMEOUT_SECS";
pub const ENV_LOG: &str = "REMITDESK_LOG";

pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Build mode the process runs under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BuildMode {
    Development,
    Production,
    Test,
}

impl Default for BuildMode {
    /// Debug builds run as development, release builds as production.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }
}

/// Root configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend base address. Empty means "no backend configured".
    pub api_url: String,
    /// Force the simulators regardless of the other inputs.
    pub use_mock_services: bool,
    pub mode: BuildMode,
    pub api_timeout_secs: u64,
    /// Value of the `lg` request header.
    pub locale: String,
    /// Value of the `ch` request header.
    pub channel: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            use_mock_services: false,
            mode: BuildMode::default(),
            api_timeout_secs: DEFAULT_API_TIMEOUT_SECS,
            locale: "en".to_string(),
            channel: "web".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Applies environment overrides on top of the file values.
    ///
    /// `lookup` abstracts `std::env::var` so callers (and tests) decide where
    /// the values come from. Unparseable values are ignored with a warning.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(flag) = lookup(ENV_USE_MOCK_SERVICES) {
            self.use_mock_services = flag.trim().eq_ignore_ascii_case("true");
        }
        if let Some(mode) = lookup(ENV_MODE) {
            match mode.trim().parse::<BuildMode>() {
                Ok(parsed) => self.mode = parsed,
                Err(_) => tracing::warn!("Ignoring unknown {}={}", ENV_MODE, mode),
            }
        }
        if let Some(timeout) = lookup(ENV_API_TIMEOUT_SECS) {
            match timeout.trim().parse::<u64>() {
                Ok(secs) => self.api_timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid {}={}", ENV_API_TIMEOUT_SECS, timeout),
            }
        }
        if let Some(level) = lookup(ENV_LOG) {
            self.log_level = level;
        }
        self
    }

    /// Flattens the configuration into the settings consumed at runtime.
    pub fn env_settings(&self) -> EnvSettings {
        EnvSettings {
            api_url: self.api_url.trim().to_string(),
            use_mock_services: self.use_mock_services,
            dev: self.mode == BuildMode::Development,
            prod: self.mode == BuildMode::Production,
            api_timeout_secs: self.api_timeout_secs,
            locale: self.locale.clone(),
            channel: self.channel.clone(),
        }
    }
}

/// Runtime view of the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSettings {
    pub api_url: String,
    pub use_mock_services: bool,
    pub dev: bool,
    pub prod: bool,
    pub api_timeout_secs: u64,
    pub locale: String,
    pub channel: String,
}

impl Default for EnvSettings {
    fn default() -> Self {
        AppConfig::default().env_settings()
    }
}

impl EnvSettings {
    /// Whether the simulators should serve auth and data calls.
    ///
    /// Recomputed on every call; the inputs never change within a process.
    pub fn should_use_mock_service(&self) -> bool {
        resolve_mock_mode(self.use_mock_services, self.dev, self.prod, &self.api_url)
    }

    /// True when simulation is active only because a production build has no
    /// backend URL. Callers surface this loudly since it serves fixture data
    /// to real operators.
    pub fn is_mock_fallback_in_production(&self) -> bool {
        self.prod && !self.use_mock_services && self.api_url.trim().is_empty()
    }
}

/// Simulation is on when forced, or whenever no backend URL is configured in
/// a development or production build.
pub fn resolve_mock_mode(force_mock: bool, dev: bool, prod: bool, api_url: &str) -> bool {
    let no_url = api_url.trim().is_empty();
    force_mock || (dev && no_url) || (prod && no_url)
}
