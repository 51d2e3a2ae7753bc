use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ItemId};

use crate::money;
use crate::status::StockStatus;

/// A stock-keeping record: the only persisted entity.
///
/// Field names are camelCase on the wire so previously stored collections
/// keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub min_stock: i64,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Materialize a new item, stamping its creation time.
    pub fn from_new(item: NewItem, created_at: DateTime<Utc>) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            quantity: item.quantity,
            price: item.price,
            min_stock: item.min_stock,
            description: item.description,
            created_at,
        }
    }

    /// `price × quantity`.
    pub fn total_value(&self) -> f64 {
        money::total_value(self.price, self.quantity)
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::of(self.quantity, self.min_stock)
    }

    /// Merge a partial update. `id` and `created_at` are not part of a patch
    /// and therefore never change here.
    pub fn apply_patch(&mut self, patch: ItemPatch) {
        let ItemPatch {
            name,
            category,
            quantity,
            price,
            min_stock,
            description,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(quantity) = quantity {
            self.quantity = quantity;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(min_stock) = min_stock {
            self.min_stock = min_stock;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Add payload: an item without its creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub min_stock: i64,
    #[serde(default)]
    pub description: String,
}

/// Update payload: any subset of the mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// True when applying this patch to `item` would leave it unchanged.
    pub fn is_noop_for(&self, item: &InventoryItem) -> bool {
        let mut probe = item.clone();
        probe.apply_patch(self.clone());
        probe == *item
    }
}
