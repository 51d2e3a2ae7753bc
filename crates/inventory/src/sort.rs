//! Column sorting for the item grid.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

use crate::item::InventoryItem;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Id,
    Name,
    Category,
    Quantity,
    Price,
    /// `price × quantity`.
    Total,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current sort column and direction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the same column flips direction, a new column starts
    /// ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.flipped())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    pub fn compare(&self, a: &InventoryItem, b: &InventoryItem) -> Ordering {
        let ord = match self.field {
            SortField::Id => compare_text(a.id.as_str(), b.id.as_str()),
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Category => compare_text(&a.category, &b.category),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Total => a.total_value().total_cmp(&b.total_value()),
        };

        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

impl ValueObject for SortSpec {}

/// Stable in-place sort; equal keys keep collection order.
pub fn sort_items(items: &mut [InventoryItem], spec: SortSpec) {
    items.sort_by(|a, b| spec.compare(a, b));
}

// Case-insensitive first so "mesa" sorts next to "Mesa"; raw order breaks ties.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
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
    fn toggle_flips_same_field_and_resets_new_field() {
        let spec = SortSpec::default();
        assert_eq!(spec, SortSpec::new(SortField::Id, SortDirection::Asc));

        let spec = spec.toggle(SortField::Id);
        assert_eq!(spec.direction, SortDirection::Desc);

        let spec = spec.toggle(SortField::Price);
        assert_eq!(spec, SortSpec::new(SortField::Price, SortDirection::Asc));
    }

    #[test]
    fn sorts_by_quantity_descending() {
        let mut items = sample_items(Utc::now());
        sort_items(&mut items, SortSpec::new(SortField::Quantity, SortDirection::Desc));
        assert_eq!(ids(&items), ["P001", "P002", "P004", "P003", "P005", "P006"]);
    }

    #[test]
    fn sorts_by_total_value() {
        let mut items = sample_items(Utc::now());
        sort_items(&mut items, SortSpec::new(SortField::Total, SortDirection::Asc));
        // P006 is worth nothing (0 units), P001 the most.
        assert_eq!(items.first().unwrap().id.as_str(), "P006");
        assert_eq!(items.last().unwrap().id.as_str(), "P001");
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut items = sample_items(Utc::now());
        sort_items(&mut items, SortSpec::new(SortField::Category, SortDirection::Asc));
        assert_eq!(ids(&items), ["P001", "P002", "P005", "P006", "P003", "P004"]);
    }

    proptest! {
        /// Property: ascending output is ordered by the sort key.
        #[test]
        fn ascending_output_is_ordered(quantities in proptest::collection::vec(0i64..1000, 6)) {
            let mut items = sample_items(Utc::now());
            for (item, q) in items.iter_mut().zip(quantities) {
                item.quantity = q;
            }

            let spec = SortSpec::new(SortField::Quantity, SortDirection::Asc);
            sort_items(&mut items, spec);

            for pair in items.windows(2) {
                prop_assert!(pair[0].quantity <= pair[1].quantity);
            }
        }
    }
}
