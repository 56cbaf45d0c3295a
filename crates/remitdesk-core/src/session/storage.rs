//! Persistent session entries.
//!
//! [`SessionStorage`] keeps the auth token and the identity of the signed-in
//! operator in a [`KeyValueStore`] under four fixed keys. It is the only
//! shared mutable state crossing component boundaries: written on
//! login/registration success and on logout or forced expiry, read by every
//! authenticated request.

use super::token::is_structurally_valid;
use crate::{RemitError, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

pub const KEY_TOKEN: &str = "token";
pub const KEY_USER_ID: &str = "userId";
pub const KEY_ROLE: &str = "role";
pub const KEY_USER_EMAIL: &str = "userEmail";

const AUTH_KEYS: [&str; 4] = [KEY_TOKEN, KEY_USER_ID, KEY_ROLE, KEY_USER_EMAIL];

/// Durable string key/value storage.
///
/// Implementations must apply `set_many` and `remove_many` as a single write
/// so the auth entries never end up half-updated.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes all entries in one operation.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()>;

    /// Removes the given keys in one operation and returns how many existed.
    fn remove_many(&self, keys: &[&str]) -> Result<usize>;
}

/// In-memory store, used for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| RemitError::storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set_many(&self, new_entries: &[(&str, &str)]) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RemitError::storage(e.to_string()))?;
        for (key, value) in new_entries {
            entries.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<usize> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| RemitError::storage(e.to_string()))?;
        Ok(keys.iter().filter(|k| entries.remove(**k).is_some()).count())
    }
}

/// Identity stored alongside the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: String,
    pub role: String,
    pub email: String,
}

/// Auth-token and identity accessors over a [`KeyValueStore`].
///
/// Read failures are logged and reported as "absent"; write failures are
/// returned so the caller can decide whether they matter.
#[derive(Clone)]
pub struct SessionStorage {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Session storage backed by memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKeyValueStore::new()))
    }

    /// Writes the token and identity together.
    pub fn store_auth(&self, token: &str, user_id: &str, role: &str, email: &str) -> Result<()> {
        self.store.set_many(&[
            (KEY_TOKEN, token),
            (KEY_USER_ID, user_id),
            (KEY_ROLE, role),
            (KEY_USER_EMAIL, email),
        ])?;
        tracing::debug!(user_id = %user_id, role = %role, "Stored session");
        Ok(())
    }

    /// True when a token is stored, non-blank, and has three segments.
    ///
    /// Shape check only; see [`super::is_structurally_valid`].
    pub fn check_token(&self) -> bool {
        self.token()
            .map(|token| is_structurally_valid(&token))
            .unwrap_or(false)
    }

    pub fn token(&self) -> Option<String> {
        self.read(KEY_TOKEN)
    }

    pub fn check_user_id(&self) -> bool {
        self.non_empty(KEY_USER_ID)
    }

    /// Stored user id, or an empty string.
    pub fn user_id(&self) -> String {
        self.read(KEY_USER_ID).unwrap_or_default()
    }

    pub fn check_user_type(&self) -> bool {
        self.non_empty(KEY_ROLE)
    }

    pub fn user_type(&self) -> Option<String> {
        self.read(KEY_ROLE)
    }

    pub fn check_user_email(&self) -> bool {
        self.non_empty(KEY_USER_EMAIL)
    }

    pub fn user_email(&self) -> Option<String> {
        self.read(KEY_USER_EMAIL)
    }

    /// Identity of the signed-in operator, when all parts are present.
    pub fn identity(&self) -> Option<SessionIdentity> {
        let user_id = self.read(KEY_USER_ID)?;
        let role = self.read(KEY_ROLE)?;
        let email = self.read(KEY_USER_EMAIL)?;
        Some(SessionIdentity {
            user_id,
            role,
            email,
        })
    }

    /// Removes all four auth entries. Safe to call when nothing is stored.
    pub fn clear_auth(&self) -> Result<()> {
        let removed = self.store.remove_many(&AUTH_KEYS)?;
        tracing::debug!(removed, "Cleared session");
        Ok(())
    }

    /// Static headers sent with every request.
    pub fn request_headers(&self, locale: &str, channel: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", "application/json".to_string()),
            ("lg", locale.to_string()),
            ("ch", channel.to_string()),
        ]
    }

    /// Static headers plus `Authorization: Bearer <token>` when a token exists.
    pub fn request_headers_with_bearer(
        &self,
        locale: &str,
        channel: &str,
    ) -> Vec<(&'static str, String)> {
        let mut headers = self.request_headers(locale, channel);
        if let Some(token) = self.token() {
            headers.push(("Authorization", format!("Bearer {}", token)));
        }
        headers
    }

    /// Stores `data` as JSON under `key`. Returns false for JSON `null`.
    pub fn keep<T: Serialize>(&self, key: &str, data: &T) -> bool {
        let json = match serde_json::to_value(data) {
            Ok(serde_json::Value::Null) => return false,
            Ok(value) => value.to_string(),
            Err(e) => {
                tracing::warn!("Failed to encode '{}': {}", key, e);
                return false;
            }
        };
        match self.store.set_many(&[(key, json.as_str())]) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to keep '{}': {}", key, e);
                false
            }
        }
    }

    /// Reads a value written by [`Self::keep`].
    pub fn fetch<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Stored value for '{}' is not valid JSON: {}", key, e);
                None
            }
        }
    }

    /// Removes `key`. Returns true only if something was removed.
    pub fn delete_item(&self, key: &str) -> bool {
        match self.store.remove_many(&[key]) {
            Ok(removed) => removed > 0,
            Err(e) => {
                tracing::warn!("Failed to delete '{}': {}", key, e);
                false
            }
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read session entry '{}': {}", key, e);
                None
            }
        }
    }

    fn non_empty(&self, key: &str) -> bool {
        self.read(key).is_some_and(|v| !v.is_empty())
    }
}

impl std::fmt::Debug for SessionStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStorage")
            .field("authenticated", &self.check_token())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_check_token_follows_shape_for_stored_values() {
        let storage = SessionStorage::in_memory();
        for token in ["a.b.c", "a.b", "", "  ", "x.y.z.w", "mock.eyJ9.abc"] {
            storage.store_auth(token, "1", "admin", "a@b.com").unwrap();
            let expected = token.split('.').count() == 3 && !token.trim().is_empty();
            assert_eq!(storage.check_token(), expected, "token {:?}", token);
        }
    }

    #[test]
    fn test_clear_auth_is_idempotent() {
        let storage = SessionStorage::in_memory();
        storage.clear_auth().unwrap();
        assert!(!storage.check_token());

        storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();
        storage.clear_auth().unwrap();
        storage.clear_auth().unwrap();

        assert!(!storage.check_token());
        assert!(storage.token().is_none());
        assert_eq!(storage.user_id(), "");
        assert!(storage.user_type().is_none());
        assert!(storage.user_email().is_none());
        assert!(storage.identity().is_none());
    }

    #[test]
    fn test_identity_round_trip() {
        let storage = SessionStorage::in_memory();
        storage
            .store_auth("a.b.c", "mock_admin_1", "admin", "ops@remit.test")
            .unwrap();

        assert!(storage.check_user_id());
        assert!(storage.check_user_type());
        assert!(storage.check_user_email());
        assert_eq!(
            storage.identity(),
            Some(SessionIdentity {
                user_id: "mock_admin_1".to_string(),
                role: "admin".to_string(),
                email: "ops@remit.test".to_string(),
            })
        );
    }

    #[test]
    fn test_bearer_header_only_when_token_present() {
        let storage = SessionStorage::in_memory();
        let headers = storage.request_headers_with_bearer("en", "web");
        assert!(headers.iter().all(|(name, _)| *name != "Authorization"));

        storage.store_auth("a.b.c", "1", "admin", "a@b.com").unwrap();
        let headers = storage.request_headers_with_bearer("en", "web");
        assert!(headers.contains(&("Authorization", "Bearer a.b.c".to_string())));
        assert!(headers.contains(&("ch", "web".to_string())));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct TablePrefs {
        page_size: u32,
    }

    #[test]
    fn test_keep_fetch_delete() {
        let storage = SessionStorage::in_memory();

        assert!(!storage.keep("prefs", &Option::<TablePrefs>::None));
        assert!(storage.keep("prefs", &TablePrefs { page_size: 25 }));
        assert_eq!(
            storage.fetch::<TablePrefs>("prefs"),
            Some(TablePrefs { page_size: 25 })
        );

        assert!(storage.delete_item("prefs"));
        assert!(!storage.delete_item("prefs"));
        assert!(storage.fetch::<TablePrefs>("prefs").is_none());
    }
}
