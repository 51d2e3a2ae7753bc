//! Process configuration from environment variables.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use thiserror::Error;

use stockroom_infra::{FileStorage, InMemoryStorage, KeyValueStorage};

use crate::bootstrap::{DEFAULT_SEED_DELAY, SharedStore};
use crate::debounce::{DEFAULT_SEARCH_DEBOUNCE, SearchDebouncer};
use crate::loading::{DEFAULT_MIN_LOADING, LoadingGate};

pub const ENV_DATA_DIR: &str = "STOCKROOM_DATA_DIR";
pub const ENV_STORAGE: &str = "STOCKROOM_STORAGE";
pub const ENV_SEED_DELAY_MS: &str = "STOCKROOM_SEED_DELAY_MS";
pub const ENV_SEARCH_DEBOUNCE_MS: &str = "STOCKROOM_SEARCH_DEBOUNCE_MS";
pub const ENV_MIN_LOADING_MS: &str = "STOCKROOM_MIN_LOADING_MS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number of milliseconds, got {value:?}")]
    InvalidMillis { var: &'static str, value: String },
    #[error("STOCKROOM_STORAGE must be `file` or `memory`, got {0:?}")]
    UnknownStorage(String),
}

/// Where the item collection lives.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum StorageKind {
    #[default]
    File,
    /// Nothing survives the process; useful for demos and tests.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub storage: StorageKind,
    /// Overrides the OS data directory for [`StorageKind::File`].
    pub data_dir: Option<PathBuf>,
    pub seed_delay: Duration,
    pub search_debounce: Duration,
    pub min_loading: Duration,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            storage: StorageKind::File,
            data_dir: None,
            seed_delay: DEFAULT_SEED_DELAY,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            min_loading: DEFAULT_MIN_LOADING,
        }
    }
}

impl DesktopConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(kind) = lookup(ENV_STORAGE) {
            config.storage = match kind.trim().to_ascii_lowercase().as_str() {
                "file" => StorageKind::File,
                "memory" => StorageKind::Memory,
                _ => return Err(ConfigError::UnknownStorage(kind)),
            };
        }
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(d) = millis(&lookup, ENV_SEED_DELAY_MS)? {
            config.seed_delay = d;
        }
        if let Some(d) = millis(&lookup, ENV_SEARCH_DEBOUNCE_MS)? {
            config.search_debounce = d;
        }
        if let Some(d) = millis(&lookup, ENV_MIN_LOADING_MS)? {
            config.min_loading = d;
        }

        Ok(config)
    }

    /// Instantiate the configured storage backend.
    pub fn open_storage(&self) -> anyhow::Result<Arc<dyn KeyValueStorage>> {
        let storage: Arc<dyn KeyValueStorage> = match self.storage {
            StorageKind::Memory => Arc::new(InMemoryStorage::new()),
            StorageKind::File => match &self.data_dir {
                Some(dir) => Arc::new(FileStorage::new(dir)),
                None => Arc::new(
                    FileStorage::open_default().context("failed to locate default storage directory")?,
                ),
            },
        };
        Ok(storage)
    }

    /// Search debouncer over `store` using the configured quiet period.
    pub fn debouncer<S>(&self, store: SharedStore<S>) -> SearchDebouncer<S>
    where
        S: KeyValueStorage + 'static,
    {
        SearchDebouncer::new(store, self.search_debounce)
    }

    pub fn loading_gate(&self) -> LoadingGate {
        LoadingGate::new(self.min_loading)
    }
}

fn millis<F>(lookup: &F, var: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<u64>();
    match parsed {
        Ok(ms) => Ok(Some(Duration::from_millis(ms))),
        Err(_) => Err(ConfigError::InvalidMillis { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from(vars: &[(&str, &str)]) -> Result<DesktopConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DesktopConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = from(&[]).unwrap();
        assert_eq!(config, DesktopConfig::default());
        assert_eq!(config.seed_delay, Duration::from_millis(1500));
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert_eq!(config.min_loading, Duration::from_millis(1000));
    }

    #[test]
    fn overrides_from_variables() {
        let config = from(&[
            (ENV_STORAGE, "Memory"),
            (ENV_DATA_DIR, "/tmp/stockroom"),
            (ENV_SEED_DELAY_MS, "0"),
            (ENV_SEARCH_DEBOUNCE_MS, " 150 "),
        ])
        .unwrap();

        assert_eq!(config.storage, StorageKind::Memory);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/stockroom")));
        assert_eq!(config.seed_delay, Duration::ZERO);
        assert_eq!(config.search_debounce, Duration::from_millis(150));
    }

    #[test]
    fn malformed_values_are_errors() {
        assert_eq!(
            from(&[(ENV_SEED_DELAY_MS, "soon")]).unwrap_err(),
            ConfigError::InvalidMillis {
                var: ENV_SEED_DELAY_MS,
                value: "soon".to_string()
            }
        );
        assert_eq!(
            from(&[(ENV_STORAGE, "sqlite")]).unwrap_err(),
            ConfigError::UnknownStorage("sqlite".to_string())
        );
    }

    #[test]
    fn memory_storage_opens_without_disk() {
        let config = DesktopConfig {
            storage: StorageKind::Memory,
            ..DesktopConfig::default()
        };
        let storage = config.open_storage().unwrap();
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    }

    #[tokio::test(start_paused = true)]
    async fn helpers_use_configured_durations() {
        use std::time::Instant;

        use stockroom_infra::ItemRepository;

        use crate::bootstrap::shared;
        use crate::notify::CollectingNotifier;
        use crate::store::InventoryStore;

        let config = from(&[(ENV_SEARCH_DEBOUNCE_MS, "50"), (ENV_MIN_LOADING_MS, "200")]).unwrap();

        let store = shared(InventoryStore::open(
            ItemRepository::new(InMemoryStorage::new()),
            Arc::new(CollectingNotifier::new()),
        ));
        let mut debouncer = config.debouncer(store.clone());
        assert_eq!(debouncer.quiet_period(), Duration::from_millis(50));
        debouncer.input("mesa");
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(store.lock().await.search_query(), "mesa");

        let t0 = Instant::now();
        let mut gate = config.loading_gate();
        assert!(gate.observe(false, t0));
        assert!(!gate.observe(false, t0 + Duration::from_millis(200)));
    }
}
