//! The inventory store: owns the item collection and the session state.
//!
//! One store is constructed per process and handed to every consumer (see
//! [`crate::bootstrap::SharedStore`]). Every mutation is flushed to the
//! repository immediately; there is no write-behind buffering.

use std::sync::Arc;

use chrono::Utc;

use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_infra::{ItemRepository, KeyValueStorage};
use stockroom_inventory::{ActiveTab, InventoryItem, ItemPatch, NewItem, StatsData};

use crate::notify::{Notification, Notifier};
use crate::session::SessionState;

pub struct InventoryStore<S>
where
    S: KeyValueStorage,
{
    repository: ItemRepository<S>,
    items: Vec<InventoryItem>,
    session: SessionState,
    loading: bool,
    notifier: Arc<dyn Notifier>,
}

impl<S> InventoryStore<S>
where
    S: KeyValueStorage,
{
    /// Load the persisted collection.
    ///
    /// An empty collection leaves the store loading until [`Self::seed`] runs;
    /// a non-empty one is ready immediately.
    pub fn open(repository: ItemRepository<S>, notifier: Arc<dyn Notifier>) -> Self {
        let items = repository.load();
        let loading = items.is_empty();
        tracing::info!(count = items.len(), loading, "inventory store opened");

        Self {
            repository,
            items,
            session: SessionState::default(),
            loading,
            notifier,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn get_item(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_ready(&self) -> bool {
        !self.loading
    }

    /// Whether startup still has to populate the demo catalog.
    pub fn needs_seed(&self) -> bool {
        self.loading && self.items.is_empty()
    }

    /// Populate an empty collection and mark the store ready.
    ///
    /// Returns `false` (and only marks ready) if items already exist.
    pub fn seed(&mut self, items: Vec<InventoryItem>) -> bool {
        let seeded = self.items.is_empty();
        if seeded {
            tracing::info!(count = items.len(), "seeding sample inventory");
            self.items = items;
            self.persist();
        }
        self.loading = false;
        seeded
    }

    /// Append a new item stamped with the current time.
    ///
    /// A duplicate id is rejected; nothing is stored or announced then.
    pub fn add_item(&mut self, item: NewItem) -> DomainResult<()> {
        if self.get_item(&item.id).is_some() {
            tracing::warn!(item_id = %item.id, "rejected item with duplicate id");
            return Err(DomainError::conflict(format!("item {} already exists", item.id)));
        }

        let item = InventoryItem::from_new(item, Utc::now());
        let notification = Notification::item_added(&item.name);
        tracing::debug!(item_id = %item.id, "item added");

        self.items.push(item);
        self.persist();
        self.notifier.notify(notification);
        Ok(())
    }

    /// Merge `patch` into the item with this id. Unknown ids change nothing,
    /// but the collection is still flushed and the confirmation still raised.
    pub fn update_item(&mut self, id: &ItemId, patch: ItemPatch) {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.apply_patch(patch);
                tracing::debug!(item_id = %id, "item updated");
            }
            None => tracing::debug!(item_id = %id, "update ignored, no such item"),
        }

        self.persist();
        self.notifier.notify(Notification::item_updated());
    }

    /// Inline-edit variant of [`Self::update_item`]: skipped entirely when the
    /// item is missing or the patch would not change it. Returns whether an
    /// update happened.
    pub fn update_item_if_changed(&mut self, id: &ItemId, patch: ItemPatch) -> bool {
        let changed = self
            .get_item(id)
            .is_some_and(|item| !patch.is_noop_for(item));
        if changed {
            self.update_item(id, patch);
        }
        changed
    }

    /// Remove the item with this id. Deleting twice is the same as once.
    pub fn delete_item(&mut self, id: &ItemId) {
        let removed = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .map(|idx| self.items.remove(idx));

        self.persist();

        match removed {
            Some(item) => {
                tracing::debug!(item_id = %id, "item deleted");
                self.notifier.notify(Notification::item_removed(&item.name));
            }
            None => tracing::debug!(item_id = %id, "delete ignored, no such item"),
        }
    }

    /// Items matching the current search and category filter, in insertion
    /// order. Sorting is left to the caller.
    pub fn filtered_items(&self) -> Vec<InventoryItem> {
        self.session.filter().apply(&self.items)
    }

    /// Statistics over the whole collection, ignoring any filter.
    pub fn stats(&self) -> StatsData {
        StatsData::compute(&self.items)
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.session.active_tab
    }

    pub fn search_query(&self) -> &str {
        &self.session.search_query
    }

    pub fn category_filter(&self) -> &str {
        &self.session.category_filter
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.session.active_tab = tab;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.session.search_query = query.into();
    }

    pub fn set_category_filter(&mut self, category: impl Into<String>) {
        self.session.category_filter = category.into();
    }

    /// The collection as pretty-printed JSON, in the stored layout.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.items)
    }

    /// Drop every item and the stored entry.
    pub fn clear_all(&mut self) {
        self.items.clear();
        if let Err(err) = self.repository.clear() {
            tracing::error!(key = %self.repository.key(), "failed to clear stored items: {err}");
        }
        self.notifier.notify(Notification::data_cleared());
    }

    fn persist(&self) {
        self.repository.save(&self.items);
    }
}

impl<S> core::fmt::Debug for InventoryStore<S>
where
    S: KeyValueStorage,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryStore")
            .field("key", &self.repository.key())
            .field("items", &self.items.len())
            .field("session", &self.session)
            .field("loading", &self.loading)
            .finish()
    }
}
