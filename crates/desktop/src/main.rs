//! Headless entry point: open the store, run first-start seeding and log a
//! summary of the inventory.
//!
//! An optional first argument is applied as the search query, so only
//! matching items are listed.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use stockroom_desktop::{DesktopConfig, InventoryStore, TracingNotifier, bootstrap, shared};
use stockroom_infra::ItemRepository;
use stockroom_inventory::format_currency;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = DesktopConfig::from_env().context("invalid configuration")?;
    tracing::info!(?config, "starting stockroom");

    let storage = config.open_storage()?;
    let store = shared(InventoryStore::open(
        ItemRepository::new(storage),
        Arc::new(TracingNotifier),
    ));

    let mut gate = config.loading_gate();
    gate.observe(store.lock().await.is_loading(), Instant::now());

    bootstrap(&store, config.seed_delay).await;

    if gate.observe(store.lock().await.is_loading(), Instant::now()) {
        tokio::time::sleep(config.min_loading).await;
    }
    tracing::info!("inventory ready");

    if let Some(search) = std::env::args().nth(1) {
        let mut debouncer = config.debouncer(store.clone());
        debouncer.input(search);
        debouncer.flush().await;
    }

    let guard = store.lock().await;
    let stats = guard.stats();
    tracing::info!(
        total_items = stats.total_items,
        categories = stats.categories,
        low_stock = stats.low_stock,
        total_value = %format_currency(stats.total_value),
        "inventory summary"
    );

    for item in guard.filtered_items() {
        tracing::info!(
            item_id = %item.id,
            name = %item.name,
            quantity = item.quantity,
            status = %item.status(),
            "item"
        );
    }

    Ok(())
}
