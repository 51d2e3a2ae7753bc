//! Inventory domain module.
//!
//! This crate contains the business rules for stock items, implemented purely
//! as deterministic domain logic (no IO, no timers, no storage). The desktop
//! store composes these pieces; presentation layers may use them directly.

pub mod catalog;
pub mod filter;
pub mod item;
pub mod money;
pub mod page;
pub mod sort;
pub mod stats;
pub mod status;
pub mod tab;
pub mod validation;

pub use catalog::{CATEGORIES, sample_items};
pub use filter::ItemFilter;
pub use item::{InventoryItem, ItemPatch, NewItem};
pub use money::{format_currency, normalize_price, total_value};
pub use page::{DEFAULT_PAGE_SIZE, Page, paginate};
pub use sort::{SortDirection, SortField, SortSpec, sort_items};
pub use stats::StatsData;
pub use status::{BadgeTone, StockStatus};
pub use tab::ActiveTab;
pub use validation::{FieldErrors, ItemForm};
