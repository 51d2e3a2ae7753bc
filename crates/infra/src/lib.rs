//! Infrastructure layer: local key-value storage and the item repository.
//!
//! Nothing here knows about sessions, notifications or timers; the desktop
//! store owns those and calls [`ItemRepository`] for load/save.

pub mod repository;
pub mod storage;

pub use repository::{ITEMS_KEY, ItemRepository};
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage, StorageError, default_data_dir};
