//! Device-local favourites and cart.
//!
//! [`CollectionStore`] owns both collections and persists them through a
//! [`CollectionBackend`]. Store contexts sharing a [`CollectionBus`] notify
//! each other of committed changes, and [`CachedCollection`] keeps a view of
//! one collection current with those notifications.

mod backend;
mod bus;
mod cached;
mod error;
mod kind;
mod store;

pub use backend::{CollectionBackend, FileBackend, MemoryBackend};
pub use bus::{
    CollectionBus, CollectionChange, CollectionEvent, CollectionSubscription,
    DEFAULT_BUS_CAPACITY,
};
pub use cached::CachedCollection;
pub use error::{CollectionStoreError, Result};
pub use kind::CollectionKind;
pub use store::CollectionStore;
