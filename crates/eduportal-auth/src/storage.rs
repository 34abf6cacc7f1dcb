//! Key/value persistence for the signed-in session.
//!
//! The session store mirrors two entries: [`TOKEN_KEY`] holds the raw token
//! and [`USER_KEY`] holds the user object as JSON. Backends only move
//! strings; interpreting them (and tolerating garbage) is the store's job.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError, RwLock};

use anyhow::Context;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove(&self, key: &str) -> anyhow::Result<()>;
}

/// Process-local storage, used by tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// A single JSON object on disk, `{ "token": "...", "user": "..." }`.
///
/// A missing file reads as empty. A file that is not a JSON object of
/// strings is an error; the session store turns that into "signed out".
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> anyhow::Result<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read {}", self.path.display()));
            }
        };

        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&raw)
            .with_context(|| format!("Malformed session file {}", self.path.display()))
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        // Write then rename so a crash never leaves a half-written file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn update<F>(&self, apply: F) -> anyhow::Result<()>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        // An unreadable file is replaced rather than blocking sign-in or sign-out.
        let mut entries = self.read_entries().unwrap_or_default();
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.update(|entries| {
            entries.remove(key);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_storage_set_get_remove() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);

        storage.set(TOKEN_KEY, "abc").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), Some("abc".to_string()));

        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileStorage::new(&path).set(TOKEN_KEY, "tok").unwrap();
        FileStorage::new(&path).set(USER_KEY, r#"{"role":"HR"}"#).unwrap();

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get(TOKEN_KEY).unwrap(), Some("tok".to_string()));
        assert_eq!(
            reopened.get(USER_KEY).unwrap(),
            Some(r#"{"role":"HR"}"#.to_string())
        );
    }

    #[test]
    fn test_file_storage_remove() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("session.json"));
        storage.set(TOKEN_KEY, "tok").unwrap();
        storage.set(USER_KEY, "{}").unwrap();

        storage.remove(TOKEN_KEY).unwrap();

        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(USER_KEY).unwrap(), Some("{}".to_string()));
    }

    #[test]
    fn test_file_storage_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileStorage::new(&path);
        assert!(storage.get(TOKEN_KEY).is_err());
    }

    #[test]
    fn test_file_storage_overwrites_malformed_file_on_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let storage = FileStorage::new(&path);
        storage.set(TOKEN_KEY, "fresh").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), Some("fresh".to_string()));
    }
}
