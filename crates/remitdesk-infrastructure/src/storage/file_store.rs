//! File-backed session store.

use super::atomic_toml::AtomicTomlFile;
use remitdesk_core::Result;
use remitdesk_core::session::KeyValueStore;
use std::collections::BTreeMap;
use std::path::PathBuf;

type Entries = BTreeMap<String, String>;

/// [`KeyValueStore`] kept in a single TOML table on disk.
///
/// Every `set_many`/`remove_many` is one locked read-modify-write followed by
/// an atomic file replacement, so a reader never sees a token without its
/// identity entries. The file is created with owner-only permissions.
pub struct FileKeyValueStore {
    file: AtomicTomlFile<Entries>,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path).private(),
        }
    }

    /// All stored entries, for diagnostics.
    pub fn entries(&self) -> Result<Entries> {
        Ok(self.file.load()?.unwrap_or_default())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.file.load()?.and_then(|mut entries| entries.remove(key)))
    }

    fn set_many(&self, new_entries: &[(&str, &str)]) -> Result<()> {
        self.file.update(Entries::new(), |entries| {
            for (key, value) in new_entries {
                entries.insert((*key).to_string(), (*value).to_string());
            }
            Ok(())
        })?;
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<usize> {
        if !self.file.path().exists() {
            return Ok(0);
        }
        let removed = self.file.update(Entries::new(), |entries| {
            Ok(keys.iter().filter(|k| entries.remove(**k).is_some()).count())
        })?;
        Ok(removed)
    }
}

impl std::fmt::Debug for FileKeyValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKeyValueStore")
            .field("path", &self.file.path())
            .finish()
    }
}
