//! Prelude module for convenient imports.
//!
//! ```
//! use pgfind_api::prelude::*;
//!
//! // Now you have access to:
//! // - ListingsClient, ListingsClientBuilder, FetchOutcome (client)
//! // - Error, ApiError, Result (error handling)
//! // - Listing, ListingRow (data models)
//! ```

// Client types
pub use crate::client::{FetchOutcome, ListingsClient, ListingsClientBuilder};

// Error types
pub use crate::error::{ApiError, Error, Result};

// Data models
pub use crate::models::{parse_price_amount, Listing, ListingRow};
