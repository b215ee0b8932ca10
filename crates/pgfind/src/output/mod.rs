//! Output formatting utilities for the pgfind CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by what is being shown:
//!
//! - [`listings`] - Listing output formatting (list, show)
//! - [`collections`] - Favourites and cart output formatting
//! - [`helpers`] - Common formatting utilities (truncation, stars, amenities)

mod collections;
pub mod helpers;
mod listings;

// Listings
pub use listings::{
    format_listing_details_json, format_listing_details_table, format_listings_json,
    format_listings_table, ListingMarks,
};

// Collections
pub use collections::{
    format_collection_change, format_collection_json, format_collection_table,
};
