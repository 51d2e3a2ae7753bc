//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use rand::Rng;

use crate::error::DomainError;

/// Prefix used for generated item codes (`P007`, `P4821`, ...).
pub const ITEM_ID_PREFIX: char = 'P';

/// Identifier of an inventory item.
///
/// Item ids are user-facing codes, not UUIDs: the form layer either takes one
/// typed by the user or calls [`ItemId::generate`].
///
/// Deserialization goes through [`ItemId::new`], so stored ids are trimmed and
/// blank ones rejected just like typed ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Build an id from user input. Surrounding whitespace is trimmed; a blank
    /// code is rejected.
    pub fn new(code: impl AsRef<str>) -> Result<Self, DomainError> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(DomainError::invalid_id("item id cannot be blank"));
        }
        Ok(Self(code.to_string()))
    }

    /// Generate a random item code: `P` followed by a number below 10000,
    /// zero-padded to at least three digits.
    ///
    /// Codes are short and can collide; the inventory store rejects a
    /// duplicate on insert.
    pub fn generate() -> Self {
        let n: u32 = rand::thread_rng().gen_range(0..10_000);
        Self(format!("{ITEM_ID_PREFIX}{n:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}
