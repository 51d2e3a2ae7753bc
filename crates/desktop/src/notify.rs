//! User-visible notifications (toasts) raised by store mutations.
//!
//! The store only triggers notifications; display duration and stacking are
//! up to whoever implements [`Notifier`].

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn item_added(name: &str) -> Self {
        Self::new("Item adicionado", format!("{name} foi adicionado ao estoque."))
    }

    pub fn item_updated() -> Self {
        Self::new("Item atualizado", "O item foi atualizado com sucesso.")
    }

    pub fn item_removed(name: &str) -> Self {
        Self::new("Item removido", format!("{name} foi removido do estoque."))
    }

    pub fn data_cleared() -> Self {
        Self::new("Dados removidos", "Todos os itens foram removidos do estoque.")
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. Default for headless runs.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        tracing::info!(title = %notification.title, "{}", notification.description);
    }
}

/// Keeps every notification in memory until taken.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    inner: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything collected so far.
    pub fn take(&self) -> Vec<Notification> {
        match self.inner.lock() {
            Ok(mut list) => std::mem::take(&mut *list),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|list| list.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut list) = self.inner.lock() {
            list.push(notification);
        }
    }
}
