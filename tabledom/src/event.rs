//! Input events and custom notifications.
//!
//! Clicks arrive from the embedding application already resolved to a
//! target element id (hit testing lives with whatever renders the tree).
//! Notifications flow the other way: behavior layers push named,
//! payload-free notifications into a queue the application drains.

use std::collections::VecDeque;

use log::trace;

/// High-level events with element targeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click resolved to an element, `None` when nothing was hit.
    Click { target: Option<String> },
}

impl Event {
    /// Click at the element with the given id.
    pub fn click(target: impl Into<String>) -> Self {
        Event::Click {
            target: Some(target.into()),
        }
    }
}

/// A named notification emitted at an element. Carries no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Id of the element the notification was dispatched at.
    pub target: String,
    /// Notification name.
    pub name: String,
}

impl Notification {
    pub fn new(target: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            name: name.into(),
        }
    }
}

/// FIFO queue of dispatched notifications, drained by the application.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch a notification at the given element.
    pub fn dispatch(&mut self, target: impl Into<String>, name: impl Into<String>) {
        let notification = Notification::new(target, name);
        trace!(
            "notification {:?} at '{}'",
            notification.name,
            notification.target
        );
        self.queue.push_back(notification);
    }

    /// Take all pending notifications, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
