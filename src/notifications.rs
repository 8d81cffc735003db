//! In-process notification manager
//!
//! A single manager owns the active toasts and the subscriber list.
//! Components that want to hear about notifications subscribe here directly
//! instead of listening on a process-wide event bus.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Maximum number of notifications kept active at once
const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub title: String,
    pub created_at: Instant,
    /// None means the notification stays until dismissed
    pub ttl: Option<Duration>,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.ttl
            .is_some_and(|ttl| now.saturating_duration_since(self.created_at) >= ttl)
    }
}

/// What subscribers are told about
#[derive(Debug, Clone, Copy)]
pub enum NotificationEvent<'a> {
    Posted(&'a Notification),
    Dismissed(NotificationId),
}

pub type Subscriber = Box<dyn FnMut(NotificationEvent<'_>)>;

pub struct NotificationManager {
    next_id: u64,
    next_subscriber: u64,
    capacity: usize,
    active: Vec<Notification>,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            next_id: 0,
            next_subscriber: 0,
            capacity: capacity.max(1),
            active: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(NotificationEvent<'_>) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if the subscriber was not registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Post a notification that stays until dismissed
    pub fn post(&mut self, severity: Severity, title: impl Into<String>) -> NotificationId {
        self.push(severity, title.into(), None)
    }

    /// Post a notification that expires after `ttl`
    pub fn post_with_ttl(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        ttl: Duration,
    ) -> NotificationId {
        self.push(severity, title.into(), Some(ttl))
    }

    fn push(&mut self, severity: Severity, title: String, ttl: Option<Duration>) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        // Make room by dropping the oldest
        while self.active.len() >= self.capacity {
            let oldest = self.active.remove(0);
            self.emit(NotificationEvent::Dismissed(oldest.id));
        }

        tracing::debug!(?id, ?severity, %title, "Notification posted");
        let notification = Notification {
            id,
            severity,
            title,
            created_at: Instant::now(),
            ttl,
        };
        self.active.push(notification);

        // Take subscribers out so they can be called with a borrow of the new entry
        let mut subscribers = std::mem::take(&mut self.subscribers);
        if let Some(posted) = self.active.last() {
            for (_, subscriber) in subscribers.iter_mut() {
                subscriber(NotificationEvent::Posted(posted));
            }
        }
        self.subscribers = subscribers;

        id
    }

    /// Returns false if no such notification is active
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let Some(index) = self.active.iter().position(|n| n.id == id) else {
            return false;
        };
        self.active.remove(index);
        self.emit(NotificationEvent::Dismissed(id));
        true
    }

    /// Dismiss every notification whose TTL elapsed; returns how many
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let expired: Vec<NotificationId> = self
            .active
            .iter()
            .filter(|n| n.is_expired(now))
            .map(|n| n.id)
            .collect();
        for id in &expired {
            self.dismiss(*id);
        }
        expired.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn emit(&mut self, event: NotificationEvent<'_>) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(event);
        }
    }
}

impl fmt::Debug for NotificationManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationManager")
            .field("capacity", &self.capacity)
            .field("active", &self.active)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
