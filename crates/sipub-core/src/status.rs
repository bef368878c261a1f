//! The single user-facing status region.
//!
//! Every operation reports through one banner and the most recent notification
//! replaces whatever was shown before. Earlier notifications stay available in
//! [`StatusBanner::history`] for callers that want a per-step view.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NotificationKind::Success => write!(f, "[ok] {}", self.message),
            NotificationKind::Error => write!(f, "[error] {}", self.message),
        }
    }
}

/// Last-write-wins status region.
#[derive(Debug, Clone, Default)]
pub struct StatusBanner {
    history: Vec<Notification>,
}

impl StatusBanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(NotificationKind::Error, message.into());
    }

    /// The notification currently displayed, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.history.last()
    }

    /// Every notification posted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Notification] {
        &self.history
    }

    fn push(&mut self, kind: NotificationKind, message: String) {
        self.history.push(Notification {
            kind,
            message,
            at: Utc::now(),
        });
    }
}
