//! Path management for remitdesk files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/remitdesk/         # Config directory (or $REMITDESK_HOME)
//! ├── config.toml              # Application configuration (optional)
//! └── session.toml             # Session entries written by the console
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the config directory when set.
pub const ENV_HOME: &str = "REMITDESK_HOME";

const APP_DIR: &str = "remitdesk";
const CONFIG_FILE: &str = "config.toml";
const SESSION_FILE: &str = "session.toml";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Neither the override nor a platform config directory is available.
    #[error("Cannot find configuration directory")]
    ConfigDirNotFound,
}

/// Resolved locations of the files remitdesk reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemitPaths {
    root: PathBuf,
}

impl RemitPaths {
    /// Resolves paths from the process environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolves paths using `lookup` for the `REMITDESK_HOME` override.
    ///
    /// Falls back to the platform config directory (`dirs::config_dir()`)
    /// joined with `remitdesk`.
    pub fn resolve_with<F>(lookup: F) -> Result<Self, PathError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(home) = lookup(ENV_HOME).filter(|h| !h.trim().is_empty()) {
            return Ok(Self::at(home));
        }
        dirs::config_dir()
            .map(|dir| Self::at(dir.join(APP_DIR)))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Uses `root` as the config directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn config_dir(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn session_file(&self) -> PathBuf {
        self.root.join(SESSION_FILE)
    }
}
