//! Persistent store adapter for the item collection.

use stockroom_inventory::InventoryItem;

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the serialized collection.
pub const ITEMS_KEY: &str = "inventoryItems";

/// Loads and saves the whole item collection as one JSON array entry.
///
/// - `load` never fails: a missing, unreadable or malformed entry is "no data".
/// - `save` rewrites the full collection on every call (no diffing). Write
///   failures are logged and absorbed; use `try_save` to observe them.
/// - No versioning: the entry is a bare array of items.
#[derive(Debug, Clone)]
pub struct ItemRepository<S>
where
    S: KeyValueStorage,
{
    storage: S,
    key: String,
}

impl<S> ItemRepository<S>
where
    S: KeyValueStorage,
{
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, ITEMS_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn load(&self) -> Vec<InventoryItem> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, "failed to read stored items, starting empty: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<InventoryItem>>(&raw) {
            Ok(items) => {
                tracing::debug!(key = %self.key, count = items.len(), "loaded stored items");
                items
            }
            Err(err) => {
                tracing::warn!(key = %self.key, "stored items are malformed, starting empty: {err}");
                Vec::new()
            }
        }
    }

    pub fn save(&self, items: &[InventoryItem]) {
        if let Err(err) = self.try_save(items) {
            tracing::error!(key = %self.key, count = items.len(), "failed to persist items: {err}");
        }
    }

    pub fn try_save(&self, items: &[InventoryItem]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(items)?;
        self.storage.set(&self.key, &payload)
    }

    /// Drop the stored entry entirely.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(&self.key)
    }
}
