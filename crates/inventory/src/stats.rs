//! Aggregate statistics over the whole collection.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

use crate::item::InventoryItem;

/// Summary figures shown above the grid.
///
/// Always computed over the entire unfiltered collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    /// Sum of all quantities.
    pub total_items: i64,
    /// Number of distinct categories.
    pub categories: usize,
    /// Items with `0 < quantity <= min_stock`; out-of-stock items are excluded.
    pub low_stock: usize,
    /// Sum of `price × quantity`.
    pub total_value: f64,
}

impl StatsData {
    pub fn compute(items: &[InventoryItem]) -> Self {
        let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();

        Self {
            total_items: items.iter().map(|i| i.quantity).sum(),
            categories: categories.len(),
            low_stock: items.iter().filter(|i| i.status().is_low()).count(),
            total_value: items.iter().map(InventoryItem::total_value).sum(),
        }
    }
}

impl ValueObject for StatsData {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_items;
    use chrono::Utc;

    #[test]
    fn empty_collection_has_zero_stats() {
        assert_eq!(StatsData::compute(&[]), StatsData::default());
    }

    #[test]
    fn sample_catalog_stats() {
        let stats = StatsData::compute(&sample_items(Utc::now()));

        assert_eq!(stats.total_items, 63);
        assert_eq!(stats.categories, 2);
        // P005 (5/5) is low; P006 (0/5) is out of stock and not counted.
        assert_eq!(stats.low_stock, 1);

        let expected = 23.0 * 7899.0 + 15.0 * 2499.0 + 8.0 * 1299.0 + 12.0 * 849.0 + 5.0 * 549.0;
        assert!((stats.total_value - expected).abs() < 1e-6);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(StatsData::compute(&sample_items(Utc::now()))).unwrap();
        assert_eq!(json["totalItems"], 63);
        assert_eq!(json["lowStock"], 1);
    }
}
