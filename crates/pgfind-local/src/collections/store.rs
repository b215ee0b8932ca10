//! The collection store.

use std::sync::Arc;

use pgfind_api::models::Listing;
use tracing::{debug, warn};
use uuid::Uuid;

use super::backend::{CollectionBackend, FileBackend, MemoryBackend};
use super::bus::{CollectionBus, CollectionChange, CollectionSubscription};
use super::error::{CollectionStoreError, Result};
use super::kind::CollectionKind;

/// Manages the favourites and cart collections of one context.
///
/// Listings are identified by name; a collection never holds two entries
/// with the same name. Every mutation loads the persisted collection, applies
/// the change, writes the whole result back and only then publishes it on the
/// bus, so another context over the same backend observes it on its next
/// [`load`](Self::load). Concurrent writers are last-writer-wins.
///
/// Cloning a store keeps its context id. Use [`new_context`](Self::new_context)
/// for an independent view that is notified of this one's changes.
///
/// # Example
///
/// ```
/// use pgfind_api::models::Listing;
/// use pgfind_local::collections::{CollectionKind, CollectionStore};
///
/// let store = CollectionStore::in_memory();
/// let sunrise = Listing::new("Sunrise PG", "Andheri", "₹8,000/month");
///
/// let favourites = store.toggle(CollectionKind::Favourites, &sunrise)?;
/// assert_eq!(favourites.len(), 1);
///
/// let favourites = store.toggle(CollectionKind::Favourites, &sunrise)?;
/// assert!(favourites.is_empty());
/// # Ok::<(), pgfind_local::collections::CollectionStoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CollectionStore {
    backend: Arc<dyn CollectionBackend>,
    bus: CollectionBus,
    context: Uuid,
}

impl CollectionStore {
    /// Creates a store over a backend, publishing on `bus`.
    pub fn new(backend: impl CollectionBackend + 'static, bus: CollectionBus) -> Self {
        Self::from_shared(Arc::new(backend), bus)
    }

    /// Creates a store over an already shared backend.
    pub fn from_shared(backend: Arc<dyn CollectionBackend>, bus: CollectionBus) -> Self {
        Self {
            backend,
            bus,
            context: Uuid::new_v4(),
        }
    }

    /// Creates a store over the default file backend with a fresh bus.
    ///
    /// # Errors
    ///
    /// Returns `CollectionStoreError::NoDataDir` if the data directory cannot be determined.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(FileBackend::new()?, CollectionBus::new()))
    }

    /// Creates an ephemeral store with nothing persisted.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new(), CollectionBus::new())
    }

    /// Returns a new context sharing this store's backend and bus.
    pub fn new_context(&self) -> Self {
        Self::from_shared(Arc::clone(&self.backend), self.bus.clone())
    }

    /// Returns the id attached to changes made through this store.
    pub fn context_id(&self) -> Uuid {
        self.context
    }

    /// Returns the bus changes are published on.
    pub fn bus(&self) -> &CollectionBus {
        &self.bus
    }

    /// Reads a collection.
    ///
    /// A missing record yields an empty collection. So does a record that
    /// cannot be read or parsed; that case is logged and never surfaced.
    pub fn load(&self, kind: CollectionKind) -> Vec<Listing> {
        let name = kind.storage_name();
        let contents = match self.backend.read(name) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(collection = name, error = %e, "failed to read collection, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Listing>>(&contents) {
            Ok(listings) => dedup_by_name(listings),
            Err(e) => {
                warn!(collection = name, error = %e, "corrupt collection record, treating as empty");
                Vec::new()
            }
        }
    }

    /// Returns true if the collection holds a listing with this name.
    pub fn contains(&self, kind: CollectionKind, name: &str) -> bool {
        self.load(kind).iter().any(|l| l.name == name)
    }

    /// Removes the listing if present by name, appends it otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be persisted.
    pub fn toggle(&self, kind: CollectionKind, listing: &Listing) -> Result<Vec<Listing>> {
        let mut items = self.load(kind);
        match items.iter().position(|l| l.name == listing.name) {
            Some(pos) => {
                items.remove(pos);
            }
            None => items.push(listing.clone()),
        }
        self.commit(kind, items)
    }

    /// Appends the listing unless one with the same name is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be persisted.
    pub fn add(&self, kind: CollectionKind, listing: &Listing) -> Result<Vec<Listing>> {
        let mut items = self.load(kind);
        if !items.iter().any(|l| l.name == listing.name) {
            items.push(listing.clone());
        }
        self.commit(kind, items)
    }

    /// Removes the listing with this name, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be persisted.
    pub fn remove(&self, kind: CollectionKind, name: &str) -> Result<Vec<Listing>> {
        let mut items = self.load(kind);
        items.retain(|l| l.name != name);
        self.commit(kind, items)
    }

    /// Empties the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the result cannot be persisted.
    pub fn clear(&self, kind: CollectionKind) -> Result<Vec<Listing>> {
        self.commit(kind, Vec::new())
    }

    /// Subscribes to changes made by other contexts on the same bus.
    pub fn subscribe(&self) -> CollectionSubscription {
        self.bus.subscribe(self.context)
    }

    /// Persists the full collection, then announces it.
    fn commit(&self, kind: CollectionKind, items: Vec<Listing>) -> Result<Vec<Listing>> {
        let name = kind.storage_name();
        let json = serde_json::to_string_pretty(&items)?;
        self.backend
            .write(name, &json)
            .map_err(|source| CollectionStoreError::Write {
                collection: name.to_string(),
                source,
            })?;

        debug!(collection = name, count = items.len(), "committed collection");
        self.bus.publish(CollectionChange::now(kind, self.context));
        Ok(items)
    }
}

/// Drops later entries whose name was already seen.
fn dedup_by_name(listings: Vec<Listing>) -> Vec<Listing> {
    let mut unique: Vec<Listing> = Vec::with_capacity(listings.len());
    for listing in listings {
        if !unique.iter().any(|l| l.name == listing.name) {
            unique.push(listing);
        }
    }
    unique
}
