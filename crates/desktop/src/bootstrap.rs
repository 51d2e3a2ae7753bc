//! Store construction and first-run seeding.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use stockroom_infra::KeyValueStorage;
use stockroom_inventory::sample_items;

use crate::store::InventoryStore;

/// Simulated startup delay before the demo catalog appears.
pub const DEFAULT_SEED_DELAY: Duration = Duration::from_millis(1500);

/// The one store handle shared by every consumer in the process.
pub type SharedStore<S> = Arc<Mutex<InventoryStore<S>>>;

pub fn shared<S>(store: InventoryStore<S>) -> SharedStore<S>
where
    S: KeyValueStorage,
{
    Arc::new(Mutex::new(store))
}

/// Seed the sample catalog into an empty store after `delay`, then mark the
/// store ready. A store opened with persisted items returns immediately.
///
/// The delay is not cancellable. Seeding is skipped if items appeared while
/// waiting.
pub async fn bootstrap<S>(store: &SharedStore<S>, delay: Duration)
where
    S: KeyValueStorage,
{
    if !store.lock().await.needs_seed() {
        tracing::debug!("persisted inventory found, skipping seed");
        return;
    }

    tokio::time::sleep(delay).await;

    let seeded = store.lock().await.seed(sample_items(Utc::now()));
    tracing::info!(seeded, "inventory store ready");
}

/// Run [`bootstrap`] in the background.
pub fn spawn_bootstrap<S>(store: SharedStore<S>, delay: Duration) -> JoinHandle<()>
where
    S: KeyValueStorage + 'static,
{
    tokio::spawn(async move { bootstrap(&store, delay).await })
}
