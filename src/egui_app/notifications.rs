/**
 * Transient Notifications
 *
 * Toasts shown after each delivery and after a cleanup. Each toast expires
 * on its own and can be dismissed early; nothing is retained once it goes.
 */

use std::fmt;
use std::time::{Duration, Instant};

use crate::shared::Submission;

/// How long a toast stays visible
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "SUCCESS"),
            NotificationKind::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub text: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            text: text.into(),
        }
    }

    /// "Successfully adding {json}"
    pub fn delivered(submission: &Submission) -> Self {
        Self::success(format!("Successfully adding {}", submission.to_json()))
    }

    /// "Fail to add {json}"
    pub fn failed(submission: &Submission) -> Self {
        Self::error(format!("Fail to add {}", submission.to_json()))
    }
}

#[derive(Debug, Clone)]
struct Toast {
    id: u64,
    notification: Notification,
    expires_at: Instant,
}

/// Visible toasts, oldest first
#[derive(Debug)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_TOAST_TTL)
    }
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    /// Show a notification; returns its id for `dismiss`
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.push_at(notification, Instant::now())
    }

    fn push_at(&mut self, notification: Notification, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            notification,
            expires_at: now + self.ttl,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }

    /// Drop every toast that has expired by `now`
    pub fn expire(&mut self, now: Instant) {
        self.entries.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Notification)> {
        self.entries.iter().map(|toast| (toast.id, &toast.notification))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
