//! A locally cached copy of one collection that follows other contexts.

use pgfind_api::models::Listing;
use tracing::debug;

use super::bus::CollectionSubscription;
use super::error::Result;
use super::kind::CollectionKind;
use super::store::CollectionStore;
use crate::summary::{summarize, CollectionSummary};

/// Holds the last loaded state of a collection.
///
/// Mutations made through the view update the cached copy directly. Changes
/// made by other contexts on the same bus are picked up by
/// [`refresh_if_changed`](Self::refresh_if_changed) or
/// [`wait_for_change`](Self::wait_for_change).
#[derive(Debug)]
pub struct CachedCollection {
    store: CollectionStore,
    kind: CollectionKind,
    items: Vec<Listing>,
    subscription: CollectionSubscription,
}

impl CachedCollection {
    /// Loads `kind` from the store and starts following it.
    pub fn new(store: CollectionStore, kind: CollectionKind) -> Self {
        // Subscribe before loading so no change slips in between
        let subscription = store.subscribe();
        let items = store.load(kind);
        Self {
            store,
            kind,
            items,
            subscription,
        }
    }

    /// Returns the collection this view follows.
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    /// Returns the cached listings.
    pub fn items(&self) -> &[Listing] {
        &self.items
    }

    /// Returns true if the cached copy holds a listing with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|l| l.name == name)
    }

    /// Returns the count and total price of the cached copy.
    pub fn summary(&self) -> CollectionSummary {
        summarize(&self.items)
    }

    /// Applies every pending notification without waiting.
    ///
    /// Returns true if the cached copy was reloaded.
    pub fn refresh_if_changed(&mut self) -> bool {
        let mut stale = false;
        while let Some(event) = self.subscription.try_recv() {
            stale |= event.affects(self.kind);
        }
        if stale {
            self.reload();
        }
        stale
    }

    /// Waits until another context changes this collection, then reloads.
    ///
    /// Returns false if the bus was closed.
    pub async fn wait_for_change(&mut self) -> bool {
        while let Some(event) = self.subscription.recv().await {
            if event.affects(self.kind) {
                self.reload();
                return true;
            }
        }
        false
    }

    /// Reloads unconditionally.
    pub fn reload(&mut self) {
        self.items = self.store.load(self.kind);
        debug!(collection = %self.kind, count = self.items.len(), "reloaded cached collection");
    }

    /// Toggles a listing through the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the result; the cached copy is unchanged.
    pub fn toggle(&mut self, listing: &Listing) -> Result<&[Listing]> {
        self.items = self.store.toggle(self.kind, listing)?;
        Ok(&self.items)
    }

    /// Adds a listing through the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the result; the cached copy is unchanged.
    pub fn add(&mut self, listing: &Listing) -> Result<&[Listing]> {
        self.items = self.store.add(self.kind, listing)?;
        Ok(&self.items)
    }

    /// Removes a listing by name through the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the result; the cached copy is unchanged.
    pub fn remove(&mut self, name: &str) -> Result<&[Listing]> {
        self.items = self.store.remove(self.kind, name)?;
        Ok(&self.items)
    }

    /// Empties the collection through the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the result; the cached copy is unchanged.
    pub fn clear(&mut self) -> Result<&[Listing]> {
        self.items = self.store.clear(self.kind)?;
        Ok(&self.items)
    }
}
