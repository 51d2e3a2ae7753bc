//! Built-in demo catalog and recognized categories.

use chrono::{DateTime, Utc};

use stockroom_core::ItemId;

use crate::item::{InventoryItem, NewItem};

/// Categories offered by the item form and the toolbar filter.
pub const CATEGORIES: [&str; 4] = [
    "Eletrônicos",
    "Móveis",
    "Material de Escritório",
    "Acessórios",
];

/// Deterministic bootstrap dataset seeded into an empty store.
pub fn sample_items(created_at: DateTime<Utc>) -> Vec<InventoryItem> {
    let rows: [(&str, &str, &str, i64, f64, i64, &str); 6] = [
        (
            "P001",
            "Notebook Dell XPS 15",
            "Eletrônicos",
            23,
            7899.00,
            5,
            "Notebook high-end para trabalhos profissionais.",
        ),
        (
            "P002",
            "Monitor LG Ultrawide 34\"",
            "Eletrônicos",
            15,
            2499.00,
            3,
            "Monitor ultrawide para maior produtividade.",
        ),
        (
            "P003",
            "Mesa de Escritório Ergonômica",
            "Móveis",
            8,
            1299.00,
            2,
            "Mesa de escritório com ajuste de altura.",
        ),
        (
            "P004",
            "Cadeira de Escritório Giratória",
            "Móveis",
            12,
            849.00,
            3,
            "Cadeira ergonômica com suporte lombar.",
        ),
        (
            "P005",
            "Teclado Mecânico Logitech",
            "Eletrônicos",
            5,
            549.00,
            5,
            "Teclado mecânico com RGB.",
        ),
        (
            "P006",
            "Mouse sem fio MX Master",
            "Eletrônicos",
            0,
            399.00,
            5,
            "Mouse sem fio de alta precisão.",
        ),
    ];

    rows.into_iter()
        .filter_map(|(id, name, category, quantity, price, min_stock, description)| {
            let id = ItemId::new(id).ok()?;
            Some(InventoryItem::from_new(
                NewItem {
                    id,
                    name: name.to_string(),
                    category: category.to_string(),
                    quantity,
                    price,
                    min_stock,
                    description: description.to_string(),
                },
                created_at,
            ))
        })
        .collect()
}
