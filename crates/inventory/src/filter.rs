//! Search + category filtering over the item collection.

use crate::item::InventoryItem;

/// Active search criteria.
///
/// - `search_query`: case-insensitive substring over name, id and category;
///   empty matches everything.
/// - `category_filter`: empty means "all categories", otherwise exact match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub search_query: String,
    pub category_filter: String,
}

impl ItemFilter {
    pub fn new(search_query: impl Into<String>, category_filter: impl Into<String>) -> Self {
        Self {
            search_query: search_query.into(),
            category_filter: category_filter.into(),
        }
    }

    pub fn matches(&self, item: &InventoryItem) -> bool {
        self.matches_search(item) && self.matches_category(item)
    }

    /// Matching items in collection order.
    pub fn apply<'a, I>(&self, items: I) -> Vec<InventoryItem>
    where
        I: IntoIterator<Item = &'a InventoryItem>,
    {
        items
            .into_iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    fn matches_search(&self, item: &InventoryItem) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        [item.name.as_str(), item.id.as_str(), item.category.as_str()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    fn matches_category(&self, item: &InventoryItem) -> bool {
        self.category_filter.is_empty() || item.category == self.category_filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_items;
    use chrono::Utc;
    use proptest::prelude::*;

    fn ids(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let items = sample_items(Utc::now());
        let out = ItemFilter::default().apply(&items);
        assert_eq!(ids(&out), ["P001", "P002", "P003", "P004", "P005", "P006"]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_id_and_category() {
        let items = sample_items(Utc::now());

        assert_eq!(ids(&ItemFilter::new("MONITOR", "").apply(&items)), ["P002"]);
        assert_eq!(ids(&ItemFilter::new("p00", "").apply(&items)).len(), 6);
        assert_eq!(
            ids(&ItemFilter::new("móveis", "").apply(&items)),
            ["P003", "P004"]
        );
    }

    #[test]
    fn category_filter_is_exact() {
        let items = sample_items(Utc::now());

        assert_eq!(ids(&ItemFilter::new("", "Móveis").apply(&items)), ["P003", "P004"]);
        assert!(ItemFilter::new("", "móveis").apply(&items).is_empty());
        assert_eq!(
            ids(&ItemFilter::new("escritório", "Móveis").apply(&items)),
            ["P003", "P004"]
        );
        assert!(ItemFilter::new("mouse", "Móveis").apply(&items).is_empty());
    }

    proptest! {
        /// Property: the filtered view is exactly the matching subset, order preserved.
        #[test]
        fn filter_returns_exact_matching_subset(query in "[a-zA-Z0-9 ]{0,4}", use_category in any::<bool>()) {
            let items = sample_items(Utc::now());
            let category = if use_category { "Eletrônicos" } else { "" };
            let filter = ItemFilter::new(query.clone(), category);

            let expected: Vec<InventoryItem> = items
                .iter()
                .filter(|i| {
                    let q = query.to_lowercase();
                    let hit = i.name.to_lowercase().contains(&q)
                        || i.id.as_str().to_lowercase().contains(&q)
                        || i.category.to_lowercase().contains(&q);
                    hit && (category.is_empty() || i.category == category)
                })
                .cloned()
                .collect();

            prop_assert_eq!(filter.apply(&items), expected);
        }
    }
}
