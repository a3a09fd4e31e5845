// src/notifications.rs
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// New listing posted.
    Success,
    /// Somebody else closed a deal.
    Sold,
    /// Price went up.
    Warning,
    /// Price went down.
    Info,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Sold => "notification-sold",
            NotificationKind::Warning => "notification-warning",
            NotificationKind::Info => "notification-info",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    /// One or more lines; rendered with a line break between them.
    pub lines: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Bounded feed of recent notifications, oldest dropped first.
#[derive(Debug)]
pub struct NotificationFeed {
    capacity: usize,
    next_id: u64,
    items: VecDeque<Notification>,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            next_id: 1,
            items: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    pub fn push(&mut self, kind: NotificationKind, lines: Vec<String>) -> &Notification {
        self.push_at(kind, lines, Utc::now())
    }

    pub fn push_at(
        &mut self,
        kind: NotificationKind,
        lines: Vec<String>,
        at: DateTime<Utc>,
    ) -> &Notification {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Notification {
            id,
            kind,
            lines,
            created_at: at,
        });

        &self.items[self.items.len() - 1]
    }

    /// Notifications younger than `ttl`, oldest first.
    pub fn active(&self, now: DateTime<Utc>, ttl: Duration) -> Vec<Notification> {
        self.items
            .iter()
            .filter(|n| now - n.created_at < ttl)
            .cloned()
            .collect()
    }
}
