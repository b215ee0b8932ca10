//! Client library for the remote PG listings table.
//!
//! [`client::ListingsClient`] performs the fetch, [`models::ListingRow`]
//! mirrors a table row, and [`models::Listing`] is the normalized record the
//! rest of the workspace filters, saves and sums.
//!
//! # Quick Start
//!
//! ```
//! use pgfind_api::prelude::*;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;
