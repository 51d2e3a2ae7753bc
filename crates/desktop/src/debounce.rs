//! Debounced propagation of search text into the store.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use stockroom_infra::KeyValueStorage;

use crate::bootstrap::SharedStore;

/// Quiet period after the last keystroke before the query is committed.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Buffers search input and commits it to the store once typing pauses.
///
/// Each [`input`](Self::input) aborts the pending commit and schedules a new
/// one, so only the last text of a burst reaches the store. The text waits in
/// a slot shared with the timer task; whichever of the timer or
/// [`flush`](Self::flush) commits first empties it. Must be used from inside
/// a tokio runtime.
pub struct SearchDebouncer<S>
where
    S: KeyValueStorage + 'static,
{
    store: SharedStore<S>,
    quiet_period: Duration,
    pending: Option<JoinHandle<()>>,
    latest: Arc<Mutex<Option<String>>>,
}

impl<S> SearchDebouncer<S>
where
    S: KeyValueStorage + 'static,
{
    pub fn new(store: SharedStore<S>, quiet_period: Duration) -> Self {
        Self {
            store,
            quiet_period,
            pending: None,
            latest: Arc::new(Mutex::new(None)),
        }
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// Record a keystroke; supersedes any commit still waiting.
    pub fn input(&mut self, text: impl Into<String>) {
        self.abort_pending();

        *lock(&self.latest) = Some(text.into());

        let store = self.store.clone();
        let latest = self.latest.clone();
        let quiet_period = self.quiet_period;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let mut store = store.lock().await;
            // Taken only once the store is held: no await between take and set.
            if let Some(text) = lock(&latest).take() {
                tracing::trace!(query = %text, "committing debounced search");
                store.set_search_query(text);
            }
        }));
    }

    /// Commit the pending text now instead of waiting for the quiet period.
    /// Does nothing once the timer has already committed it.
    pub async fn flush(&mut self) {
        self.abort_pending();
        let mut store = self.store.lock().await;
        if let Some(text) = lock(&self.latest).take() {
            store.set_search_query(text);
        }
    }

    /// Drop the pending text without committing it.
    pub fn cancel(&mut self) {
        self.abort_pending();
        *lock(&self.latest) = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

fn lock(slot: &Mutex<Option<String>>) -> std::sync::MutexGuard<'_, Option<String>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S> Drop for SearchDebouncer<S>
where
    S: KeyValueStorage + 'static,
{
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::bootstrap::shared;
    use crate::notify::CollectingNotifier;
    use crate::store::InventoryStore;
    use stockroom_infra::{InMemoryStorage, ItemRepository};

    fn store() -> SharedStore<InMemoryStorage> {
        shared(InventoryStore::open(
            ItemRepository::new(InMemoryStorage::new()),
            Arc::new(CollectingNotifier::new()),
        ))
    }

    async fn query(store: &SharedStore<InMemoryStorage>) -> String {
        store.lock().await.search_query().to_string()
    }

    #[tokio::test(start_paused = true)]
    async fn commits_last_input_after_quiet_period() {
        let store = store();
        let mut debouncer = SearchDebouncer::new(store.clone(), DEFAULT_SEARCH_DEBOUNCE);

        debouncer.input("c");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.input("ca");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.input("cabo");

        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(query(&store).await, "");
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(query(&store).await, "cabo");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn flush_commits_immediately() {
        let store = store();
        let mut debouncer = SearchDebouncer::new(store.clone(), DEFAULT_SEARCH_DEBOUNCE);

        debouncer.input("mesa");
        debouncer.flush().await;
        assert_eq!(query(&store).await, "mesa");

        // The aborted timer must not fire later.
        store.lock().await.set_search_query("");
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(query(&store).await, "");
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_text() {
        let store = store();
        let mut debouncer = SearchDebouncer::new(store.clone(), DEFAULT_SEARCH_DEBOUNCE);

        debouncer.input("teclado");
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(query(&store).await, "");
        debouncer.flush().await;
        assert_eq!(query(&store).await, "");
    }

    #[tokio::test(start_paused = true)]
    async fn flush_after_timer_fired_keeps_newer_query() {
        let store = store();
        let mut debouncer = SearchDebouncer::new(store.clone(), DEFAULT_SEARCH_DEBOUNCE);

        debouncer.input("cabo");
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(query(&store).await, "cabo");

        store.lock().await.set_search_query("");
        debouncer.flush().await;
        assert_eq!(query(&store).await, "");
    }
}
