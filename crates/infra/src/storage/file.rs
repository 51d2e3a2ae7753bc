//! File-backed key-value storage: one `<key>.json` file per entry.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::key_value::{KeyValueStorage, StorageError};

/// Stores each key as a file inside `dir`.
///
/// Writes go to `<key>.json.tmp` and are renamed over the entry, so a crash
/// mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage under the OS data directory: `{app_data_dir}/stockroom`.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(default_data_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StorageError::Io { path, source })?;

        tracing::trace!(key, bytes = value.len(), "storage entry written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

/// Resolve `{app_data_dir}/stockroom`, falling back to `~/.local/share`.
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir()
        .or_else(|| {
            dirs::home_dir().map(|mut h| {
                h.push(".local");
                h.push("share");
                h
            })
        })
        .context("failed to resolve OS app data directory - tried data_dir() and home_dir()/.local/share")?;

    let mut dir = base;
    dir.push("stockroom");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("stockroom-file-storage-{}", uuid::Uuid::now_v7()))
    }

    #[test]
    fn missing_entry_reads_as_none() {
        let storage = FileStorage::new(scratch_dir());
        assert_eq!(storage.get("inventoryItems").unwrap(), None);
    }

    #[test]
    fn write_then_read_back() {
        let dir = scratch_dir();
        let storage = FileStorage::new(&dir);

        storage.set("inventoryItems", "[]").unwrap();
        assert_eq!(storage.get("inventoryItems").unwrap().as_deref(), Some("[]"));
        assert!(dir.join("inventoryItems.json").exists());
        assert!(!dir.join("inventoryItems.json.tmp").exists());

        storage.set("inventoryItems", "[1]").unwrap();
        assert_eq!(storage.get("inventoryItems").unwrap().as_deref(), Some("[1]"));

        storage.remove("inventoryItems").unwrap();
        storage.remove("inventoryItems").unwrap();
        assert_eq!(storage.get("inventoryItems").unwrap(), None);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_path_like_keys() {
        let storage = FileStorage::new(scratch_dir());
        for key in ["", "../escape", "a/b", ".hidden"] {
            match storage.set(key, "x") {
                Err(StorageError::InvalidKey(_)) => {}
                other => panic!("Expected InvalidKey for {key:?}, got {other:?}"),
            }
        }
    }
}
