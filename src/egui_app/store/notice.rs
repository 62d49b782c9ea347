//! Store notifications.
//!
//! Observers receive a [`StoreEvent`] whenever the collection changes and
//! once per operation outcome that the operator should see.

use chrono::{DateTime, Utc};
use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Operator-facing message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The collection was mutated; `len` is its new size
    Changed { len: usize },
    Notice(Notice),
}

/// Fan-out to subscribers; disconnected receivers are pruned on publish
#[derive(Debug, Default)]
pub(crate) struct Observers {
    subscribers: Vec<Sender<StoreEvent>>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    pub(crate) fn publish(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }
}
