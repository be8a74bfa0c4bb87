//! Subscriber list for list notifications.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::events::ListEvent;

/// Unique identifier for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__subscription_{}", self.0)
    }
}

/// A notification callback.
pub type Subscriber<D> = Arc<dyn Fn(&ListEvent<D>) + Send + Sync>;

/// Delivers notifications to subscribers in subscription order.
///
/// The subscriber list is snapshotted before delivery, so callbacks may
/// subscribe, unsubscribe or trigger nested notifications.
pub struct EventBus<D> {
    subscribers: Arc<RwLock<Vec<(SubscriptionId, Subscriber<D>)>>>,
}

impl<D> Default for EventBus<D> {
    fn default() -> Self {
        Self {
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<D> Clone for EventBus<D> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<D> EventBus<D> {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber.
    pub fn subscribe(&self, subscriber: Subscriber<D>) -> SubscriptionId {
        let id = SubscriptionId::new();
        if let Ok(mut subscribers) = self.subscribers.write() {
            subscribers.push((id, subscriber));
        }
        id
    }

    /// Remove a subscriber. Returns false if it was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let Ok(mut subscribers) = self.subscribers.write() else {
            return false;
        };
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    /// Deliver one notification.
    pub fn emit(&self, event: &ListEvent<D>) {
        let snapshot: Vec<Subscriber<D>> = match self.subscribers.read() {
            Ok(subscribers) => subscribers.iter().map(|(_, s)| Arc::clone(s)).collect(),
            Err(_) => return,
        };
        log::debug!(
            "[EventBus::emit] {} to {} subscriber(s)",
            event.name(),
            snapshot.len()
        );
        for subscriber in snapshot {
            subscriber(event);
        }
    }

    /// Drop every subscriber.
    pub fn clear(&self) {
        if let Ok(mut subscribers) = self.subscribers.write() {
            subscribers.clear();
        }
    }

    /// Get the number of subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.read().map(|s| s.len()).unwrap_or(0)
    }

    /// Check if nobody is subscribed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D> std::fmt::Debug for EventBus<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.len())
            .finish()
    }
}
