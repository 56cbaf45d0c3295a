//! Durable storage.
//!
//! - `atomic_toml`: whole-file TOML read/replace with an advisory lock
//! - `file_store`: the session [`remitdesk_core::session::KeyValueStore`] on top of it

mod atomic_toml;
mod file_store;

pub use atomic_toml::{AtomicTomlError, AtomicTomlFile};
pub use file_store::FileKeyValueStore;
