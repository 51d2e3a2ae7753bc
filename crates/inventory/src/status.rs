//! Stock status classification.

use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

/// Derived classification of an item's stock level.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

/// Badge colour a presentation layer should use for a status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Red,
    Orange,
    Green,
}

impl StockStatus {
    /// Pure function of `(quantity, min_stock)`:
    ///
    /// - `quantity <= 0` → out of stock
    /// - `0 < quantity <= min_stock` → low stock
    /// - `quantity > min_stock` → in stock
    pub fn of(quantity: i64, min_stock: i64) -> Self {
        if quantity <= 0 {
            StockStatus::OutOfStock
        } else if quantity <= min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Sem estoque",
            StockStatus::LowStock => "Estoque baixo",
            StockStatus::InStock => "Em estoque",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            StockStatus::OutOfStock => BadgeTone::Red,
            StockStatus::LowStock => BadgeTone::Orange,
            StockStatus::InStock => BadgeTone::Green,
        }
    }

    /// Only low-stock items count toward the "low stock" statistic.
    pub fn is_low(&self) -> bool {
        matches!(self, StockStatus::LowStock)
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl ValueObject for StockStatus {}
