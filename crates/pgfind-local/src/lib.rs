//! Local state for the PG finder.
//!
//! This crate holds everything that lives on the device rather than in the
//! remote listings table:
//!
//! - [`filter`] narrows a fetched listing collection by several criteria at once
//! - [`collections`] persists the favourites and cart collections and keeps
//!   several store contexts in step
//! - [`summary`] derives the count and estimated total of a collection

pub mod collections;
pub mod filter;
pub mod summary;

pub use collections::{
    CachedCollection, CollectionBackend, CollectionBus, CollectionChange, CollectionEvent,
    CollectionKind, CollectionStore, CollectionStoreError, CollectionSubscription, FileBackend,
    MemoryBackend,
};
pub use filter::{FilterCriteria, FilterEngine, FilterError};
pub use summary::{format_rupees, summarize, CollectionSummary};
