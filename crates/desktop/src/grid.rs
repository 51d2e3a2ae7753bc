//! Grid state: sorting, paging, row selection and inline cell edits.

use std::collections::BTreeSet;

use stockroom_core::{DomainError, DomainResult, ItemId};
use stockroom_inventory::{
    DEFAULT_PAGE_SIZE, InventoryItem, ItemPatch, Page, SortField, SortSpec, normalize_price,
    paginate, sort_items,
};

/// Per-view grid state layered on top of the store's filtered items.
#[derive(Debug, Clone)]
pub struct GridState {
    pub sort: SortSpec,
    pub page: usize,
    pub page_size: usize,
    pub selection: GridSelection,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            sort: SortSpec::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            selection: GridSelection::default(),
        }
    }
}

impl GridState {
    pub fn on_header_click(&mut self, field: SortField) {
        self.sort = self.sort.toggle(field);
    }

    /// Sort the filtered items and cut out the current page.
    pub fn view(&self, filtered: &[InventoryItem]) -> Page<InventoryItem> {
        let mut rows = filtered.to_vec();
        sort_items(&mut rows, self.sort);
        paginate(&rows, self.page, self.page_size)
    }
}

/// Ids of checked rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSelection {
    selected: BTreeSet<ItemId>,
}

impl GridSelection {
    pub fn set(&mut self, id: &ItemId, checked: bool) {
        if checked {
            self.selected.insert(id.clone());
        } else {
            self.selected.remove(id);
        }
    }

    pub fn toggle(&mut self, id: &ItemId) {
        let checked = !self.is_selected(id);
        self.set(id, checked);
    }

    /// Header checkbox: select every visible row, or clear the selection.
    pub fn select_all(&mut self, visible: &[InventoryItem], checked: bool) {
        self.selected.clear();
        if checked {
            self.selected
                .extend(visible.iter().map(|item| item.id.clone()));
        }
    }

    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.selected.contains(id)
    }

    /// Header checkbox state; an empty view is never "all selected".
    pub fn is_all_selected(&self, visible: &[InventoryItem]) -> bool {
        !visible.is_empty() && visible.iter().all(|item| self.is_selected(&item.id))
    }

    /// Forget rows that are no longer displayed (deleted or filtered out).
    pub fn retain_visible(&mut self, visible: &[InventoryItem]) {
        self.selected
            .retain(|id| visible.iter().any(|item| &item.id == id));
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.selected.iter()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

/// Columns editable in place.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EditableField {
    Name,
    Category,
    Quantity,
    Price,
    MinStock,
}

impl core::str::FromStr for EditableField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(EditableField::Name),
            "category" => Ok(EditableField::Category),
            "quantity" => Ok(EditableField::Quantity),
            "price" => Ok(EditableField::Price),
            "minStock" => Ok(EditableField::MinStock),
            "id" | "createdAt" => Err(DomainError::validation(format!("{s} cannot be edited"))),
            other => Err(DomainError::validation(format!("unknown field: {other}"))),
        }
    }
}

/// Turn raw cell text into a single-field patch.
///
/// Text fields must stay non-blank; counts must be non-negative integers;
/// prices go through [`normalize_price`] and must be positive.
pub fn parse_cell_edit(field: &str, raw: &str) -> DomainResult<ItemPatch> {
    let field: EditableField = field.parse()?;
    let raw = raw.trim();

    let patch = match field {
        EditableField::Name => ItemPatch {
            name: Some(non_blank(raw, "name")?),
            ..ItemPatch::default()
        },
        EditableField::Category => ItemPatch {
            category: Some(non_blank(raw, "category")?),
            ..ItemPatch::default()
        },
        EditableField::Quantity => ItemPatch {
            quantity: Some(non_negative(raw, "quantity")?),
            ..ItemPatch::default()
        },
        EditableField::MinStock => ItemPatch {
            min_stock: Some(non_negative(raw, "minStock")?),
            ..ItemPatch::default()
        },
        EditableField::Price => {
            let price = normalize_price(raw)
                .filter(|p| *p > 0.0)
                .ok_or_else(|| DomainError::validation(format!("invalid price: {raw:?}")))?;
            ItemPatch {
                price: Some(price),
                ..ItemPatch::default()
            }
        }
    };

    Ok(patch)
}

fn non_blank(raw: &str, field: &str) -> DomainResult<String> {
    if raw.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(raw.to_string())
}

fn non_negative(raw: &str, field: &str) -> DomainResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|n| *n >= 0)
        .ok_or_else(|| DomainError::validation(format!("{field} must be a whole number >= 0")))
}
