//! Session domain module.
//!
//! # Module Structure
//!
//! - `token`: token shape check and best-effort claim decoding
//! - `storage`: the key/value abstraction and the auth entries kept in it
//!
//! # Usage
//!
//! ```ignore
//! use remitdesk_core::session::{SessionStorage, KeyValueStore, is_structurally_valid};
//! ```

mod storage;
mod token;

pub use storage::{
    KEY_ROLE, KEY_TOKEN, KEY_USER_EMAIL, KEY_USER_ID, KeyValueStore, MemoryKeyValueStore,
    SessionIdentity, SessionStorage,
};
pub use token::{TokenClaims, decode_claims, is_structurally_valid};
