//! Infrastructure layer for remitdesk.
//!
//! Implements the core traits against the outside world: the session file on
//! disk, `config.toml`, the admin REST backend over `reqwest`, and the
//! in-process simulators used when no backend is configured.

pub mod config_service;
pub mod http;
pub mod mock;
pub mod paths;
pub mod storage;

pub use config_service::ConfigService;
pub use http::{ApiClient, HttpAdminRepository, HttpAuthService};
pub use mock::{MockAdminRepository, MockAuthService};
pub use paths::{PathError, RemitPaths};
pub use storage::{AtomicTomlError, AtomicTomlFile, FileKeyValueStore};
