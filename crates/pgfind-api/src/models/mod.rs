//! Listing data types.
//!
//! [`ListingRow`] mirrors a row of the remote table; [`Listing`] is the
//! normalized record every other part of the workspace works with.

mod listing;
mod row;

pub use listing::*;
pub use row::ListingRow;
