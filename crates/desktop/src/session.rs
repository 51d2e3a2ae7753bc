//! Per-process UI selection state. Never persisted.

use stockroom_inventory::{ActiveTab, ItemFilter};

/// Active tab, search text and category filter; all reset on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub active_tab: ActiveTab,
    pub search_query: String,
    pub category_filter: String,
}

impl SessionState {
    /// Filter criteria derived from the current search and category.
    pub fn filter(&self) -> ItemFilter {
        ItemFilter::new(self.search_query.clone(), self.category_filter.clone())
    }
}
