//! Registry change notifications via channels

use chrono::{DateTime, Utc};
use form_observer_common::Vid;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEvent {
    pub event_type: RegistryEventType,
    pub vid: Vid,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEventType {
    Subscribed,
    Replaced,
    Unsubscribed,
}

pub struct EventStream {
    sender: broadcast::Sender<RegistryEvent>,
}

impl EventStream {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn emit(&self, event_type: RegistryEventType, vid: Vid) {
        // Ignore send errors (no receivers)
        let _ = self.sender.send(RegistryEvent {
            event_type,
            vid,
            timestamp: Utc::now(),
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventStream {
    fn default() -> Self {
        Self::new(64)
    }
}
