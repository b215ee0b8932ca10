//! Change notification between store contexts.
//!
//! Every committed mutation is published on a [`CollectionBus`]. Subscribers
//! see the changes of every *other* context sharing the bus. Delivery is
//! best-effort: a subscriber that falls behind the channel capacity is told
//! to resynchronize instead of silently losing events.

use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tracing::{debug, trace};
use uuid::Uuid;

use super::kind::CollectionKind;

/// Number of buffered changes per subscriber.
pub const DEFAULT_BUS_CAPACITY: usize = 64;

/// A committed mutation of one collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionChange {
    /// The collection that changed.
    pub kind: CollectionKind,
    /// Context id of the store that made the change.
    pub origin: Uuid,
    /// When the change was committed.
    pub at: DateTime<Utc>,
}

impl CollectionChange {
    /// Creates a change stamped with the current time.
    pub fn now(kind: CollectionKind, origin: Uuid) -> Self {
        Self {
            kind,
            origin,
            at: Utc::now(),
        }
    }
}

/// What a subscriber receives.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionEvent {
    /// Another context changed a collection.
    Changed(CollectionChange),
    /// The subscriber missed `missed` changes; every collection must be reloaded.
    Resync { missed: u64 },
}

impl CollectionEvent {
    /// Returns true if a cached copy of `kind` is stale after this event.
    pub fn affects(&self, kind: CollectionKind) -> bool {
        match self {
            CollectionEvent::Changed(change) => change.kind == kind,
            CollectionEvent::Resync { .. } => true,
        }
    }
}

/// Broadcast channel shared by every store context of a process.
#[derive(Debug, Clone)]
pub struct CollectionBus {
    sender: broadcast::Sender<CollectionChange>,
}

impl Default for CollectionBus {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionBus {
    /// Creates a bus with [`DEFAULT_BUS_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUS_CAPACITY)
    }

    /// Creates a bus buffering up to `capacity` changes per subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes a change. Having no subscribers is not an error.
    pub fn publish(&self, change: CollectionChange) {
        match self.sender.send(change) {
            Ok(receivers) => trace!(receivers, "published collection change"),
            Err(_) => trace!("no subscribers for collection change"),
        }
    }

    /// Subscribes to changes not originating from `context`.
    pub fn subscribe(&self, context: Uuid) -> CollectionSubscription {
        CollectionSubscription {
            receiver: self.sender.subscribe(),
            context,
        }
    }

    /// Returns the number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Stream of changes made by other contexts.
#[derive(Debug)]
pub struct CollectionSubscription {
    receiver: broadcast::Receiver<CollectionChange>,
    context: Uuid,
}

impl CollectionSubscription {
    /// Waits for the next change from another context.
    ///
    /// Returns `None` once every bus handle has been dropped.
    pub async fn recv(&mut self) -> Option<CollectionEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(change) if change.origin == self.context => continue,
                Ok(change) => return Some(CollectionEvent::Changed(change)),
                Err(RecvError::Lagged(missed)) => {
                    debug!(missed, "collection subscriber lagged");
                    return Some(CollectionEvent::Resync { missed });
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns the next pending change from another context without waiting.
    pub fn try_recv(&mut self) -> Option<CollectionEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(change) if change.origin == self.context => continue,
                Ok(change) => return Some(CollectionEvent::Changed(change)),
                Err(TryRecvError::Lagged(missed)) => {
                    debug!(missed, "collection subscriber lagged");
                    return Some(CollectionEvent::Resync { missed });
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }
}
