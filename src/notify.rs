use std::collections::VecDeque;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::ValidationError;
use crate::models::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Default,
    Destructive,
}

/// A toast: what happened, to whom, and how loudly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn created(kind: EntityKind, label: &str) -> Self {
        Self::new(format!("{} created", kind.name()), format!("{label} has been added"))
    }

    pub fn updated(kind: EntityKind, label: &str) -> Self {
        Self::new(format!("{} updated", kind.name()), format!("{label} has been updated"))
    }

    pub fn deleted(kind: EntityKind, label: &str) -> Self {
        Self::new(format!("{} deleted", kind.name()), format!("{label} has been removed"))
    }

    pub fn validation_failed(err: &ValidationError) -> Self {
        Self::destructive("Validation Error", err.to_string())
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Keeps the most recent notifications so the client can poll them.
pub struct NotificationCenter {
    capacity: usize,
    recent: Mutex<VecDeque<Notification>>,
}

impl NotificationCenter {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            recent: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Oldest first.
    pub fn recent(&self) -> Vec<Notification> {
        self.recent.lock().iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<Notification> {
        self.recent.lock().back().cloned()
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => info!("{}: {}", notification.title, notification.description),
            Severity::Destructive => warn!("{}: {}", notification.title, notification.description),
        }

        let mut recent = self.recent.lock();
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(notification);
    }
}
