//! Item form validation.
//!
//! The store never re-validates; callers run payloads through [`ItemForm`]
//! first and show [`FieldErrors`] next to the offending inputs.

use std::collections::BTreeMap;

use serde::Serialize;

use stockroom_core::ItemId;

use crate::item::{InventoryItem, ItemPatch, NewItem};

/// Field name → human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Clear one field's message once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Raw add/edit form contents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
    pub min_stock: i64,
    pub description: String,
}

impl ItemForm {
    /// Empty add form with a freshly generated code.
    pub fn blank() -> Self {
        Self {
            id: Some(ItemId::generate().to_string()),
            ..Self::default()
        }
    }

    /// Edit form pre-filled from an existing item.
    pub fn from_item(item: &InventoryItem) -> Self {
        Self {
            id: Some(item.id.to_string()),
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            price: item.price,
            min_stock: item.min_stock,
            description: item.description.clone(),
        }
    }

    /// Validate for add mode.
    pub fn validate(&self) -> Result<NewItem, FieldErrors> {
        let mut errors = self.field_errors();

        let id = match self.id.as_deref().map(ItemId::new) {
            Some(Ok(id)) => Some(id),
            _ => {
                errors.insert("id", "ID é obrigatório");
                None
            }
        };

        match id {
            Some(id) if errors.is_empty() => Ok(NewItem {
                id,
                name: self.name.trim().to_string(),
                category: self.category.trim().to_string(),
                quantity: self.quantity,
                price: self.price,
                min_stock: self.min_stock,
                description: self.description.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Validate for edit mode. The id is fixed by the item being edited, so
    /// only the mutable fields are checked; every one of them is carried in
    /// the patch.
    pub fn into_patch(&self) -> Result<ItemPatch, FieldErrors> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ItemPatch {
            name: Some(self.name.trim().to_string()),
            category: Some(self.category.trim().to_string()),
            quantity: Some(self.quantity),
            price: Some(self.price),
            min_stock: Some(self.min_stock),
            description: Some(self.description.clone()),
        })
    }

    fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert("name", "Nome do produto é obrigatório");
        }
        if self.category.trim().is_empty() {
            errors.insert("category", "Categoria é obrigatória");
        }
        if self.quantity < 0 {
            errors.insert("quantity", "Quantidade deve ser no mínimo 0");
        }
        if self.price.is_nan() || self.price <= 0.0 {
            errors.insert("price", "Preço deve ser maior que 0");
        }
        if self.min_stock < 0 {
            errors.insert("minStock", "Estoque mínimo deve ser no mínimo 0");
        }

        errors
    }
}
