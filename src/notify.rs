//! User-facing notifications.
//!
//! The core only produces [`Notification`] values; how they are shown is up
//! to whatever implements [`NotificationSink`]. [`NotificationCenter`] is the
//! in-memory list the application state keeps.

use std::time::{Duration, Instant};
use serde::Serialize;
use tracing::debug;

/// How long a non-persistent notification stays visible.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// Follow-up the user can trigger from a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationAction {
    Dismiss,
    OpenSettings,
}

impl NotificationAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dismiss => "Dismiss",
            Self::OpenSettings => "Open Settings",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
    pub persistent: bool,
    pub actions: Vec<NotificationAction>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            persistent: false,
            actions: Vec::new(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Warning, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, description)
    }

    pub fn persistent(self) -> Self {
        Self { persistent: true, ..self }
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// Anything that accepts notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// A notification as stored by the [`NotificationCenter`].
#[derive(Debug, Clone)]
pub struct PostedNotification {
    pub id: u64,
    pub notification: Notification,
    pub posted_at: Instant,
}

/// In-memory notification list, oldest first.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    entries: Vec<PostedNotification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PostedNotification] {
        &self.entries
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.last().map(|e| &e.notification)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn post_at(&mut self, notification: Notification, now: Instant) -> u64 {
        self.next_id += 1;
        debug!("[{:?}] {}: {}", notification.kind, notification.title, notification.description);
        self.entries.push(PostedNotification {
            id: self.next_id,
            notification,
            posted_at: now,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Removes non-persistent notifications older than [`TOAST_TTL`].
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| {
            e.notification.persistent || now.saturating_duration_since(e.posted_at) < TOAST_TTL
        });
        before - self.entries.len()
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&mut self, notification: Notification) {
        self.post_at(notification, Instant::now());
    }
}
