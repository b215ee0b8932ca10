//! Multi-predicate filtering of the listing collection.
//!
//! A listing is visible when it satisfies all five predicates at once:
//!
//! - **text** - the name contains the search text (case-insensitive)
//! - **location** - the location equals the selected one (case-insensitive),
//!   or no location / `"all"` is selected
//! - **price** - the monthly amount is at most the ceiling
//! - **amenities** - every required tag is present
//! - **rating** - the rating is at least the minimum, if one is set
//!
//! Filtering is stable and pure: the result is a subsequence of the input in
//! the original order, and nothing is mutated.
//!
//! # Example
//!
//! ```
//! use pgfind_api::models::Listing;
//! use pgfind_local::filter::FilterEngine;
//!
//! let listings = vec![
//!     Listing::new("Sunrise PG", "Andheri", "₹8,000/month").with_amenities(["WiFi", "Gym"]),
//!     Listing::new("Parkview PG", "Bandra", "₹9,500/month").with_amenities(["WiFi"]),
//! ];
//!
//! let mut engine = FilterEngine::new();
//! engine.toggle_amenity("Gym");
//! assert_eq!(engine.apply(&listings).len(), 1);
//!
//! engine.clear();
//! assert_eq!(engine.apply(&listings).len(), 2);
//! ```

mod criteria;
mod engine;
mod error;
mod evaluator;

pub use criteria::{
    snap_price, FilterCriteria, ALL_LOCATIONS, AMENITY_OPTIONS, DEFAULT_MAX_PRICE,
    LOCATION_OPTIONS, PRICE_SLIDER_MAX, PRICE_SLIDER_MIN, PRICE_SLIDER_STEP, RATING_OPTIONS,
};
pub use engine::FilterEngine;
pub use error::{FilterError, FilterResult};
pub use evaluator::{apply, FilterEvaluator};

#[cfg(test)]
mod tests;
