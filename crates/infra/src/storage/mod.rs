//! Local key-value storage abstractions (the browser "local storage" seam).

pub mod file;
pub mod in_memory;
pub mod key_value;

pub use file::{FileStorage, default_data_dir};
pub use in_memory::InMemoryStorage;
pub use key_value::{KeyValueStorage, StorageError};
