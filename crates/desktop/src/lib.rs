//! `stockroom-desktop`
//!
//! **Responsibility:** the single-user inventory client core.
//!
//! This crate provides:
//! - The inventory store (items, mutations, filtered view, statistics)
//! - Session state (active tab, search, category filter)
//! - Startup seeding, debounced search and the loading indicator
//! - Grid helpers (sorting, paging, selection, inline edits)
//!
//! Rendering is left to whatever presentation layer embeds the store.

pub mod bootstrap;
pub mod config;
pub mod debounce;
pub mod grid;
pub mod loading;
pub mod notify;
pub mod session;
pub mod store;

pub use bootstrap::{SharedStore, bootstrap, shared, spawn_bootstrap};
pub use config::{ConfigError, DesktopConfig, StorageKind};
pub use debounce::SearchDebouncer;
pub use grid::{EditableField, GridSelection, GridState, parse_cell_edit};
pub use loading::LoadingGate;
pub use notify::{CollectingNotifier, Notification, Notifier, TracingNotifier};
pub use session::SessionState;
pub use store::InventoryStore;
