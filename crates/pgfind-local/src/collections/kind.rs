use std::fmt;

use serde::{Deserialize, Serialize};

/// The two device-local collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    /// Saved listings.
    Favourites,
    /// Listings pending a purchase step.
    Cart,
}

impl CollectionKind {
    /// Every collection, in display order.
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Favourites, CollectionKind::Cart];

    /// Name the collection is persisted under.
    pub fn storage_name(self) -> &'static str {
        match self {
            CollectionKind::Favourites => "favourites",
            CollectionKind::Cart => "cart",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_name())
    }
}
