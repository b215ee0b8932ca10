//! Filter evaluation against listings.
//!
//! This module provides the [`FilterEvaluator`] for testing listings against
//! a [`FilterCriteria`], and [`apply`] for filtering a whole collection.
//!
//! # Example
//!
//! ```
//! use pgfind_api::models::Listing;
//! use pgfind_local::filter::{apply, FilterCriteria};
//!
//! let listings = vec![
//!     Listing::new("Parkview PG", "Bandra", "₹9,000/month"),
//!     Listing::new("Sunrise PG", "Andheri", "₹8,000/month"),
//! ];
//!
//! let criteria = FilterCriteria::new().with_search_text("park");
//! let visible = apply(&listings, &criteria);
//!
//! assert_eq!(visible.len(), 1);
//! assert_eq!(visible[0].name, "Parkview PG");
//! ```

use pgfind_api::models::Listing;

use super::criteria::FilterCriteria;

/// Evaluates criteria against listings.
///
/// The search text and location are case-folded once at construction so
/// evaluating a large collection does not repeat the work per listing.
#[derive(Debug)]
pub struct FilterEvaluator<'a> {
    criteria: &'a FilterCriteria,
    search_lower: String,
    location_lower: Option<String>,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new filter evaluator.
    pub fn new(criteria: &'a FilterCriteria) -> Self {
        let location_lower = if criteria.is_any_location() {
            None
        } else {
            Some(criteria.selected_location.trim().to_lowercase())
        };

        Self {
            criteria,
            search_lower: criteria.search_text.to_lowercase(),
            location_lower,
        }
    }

    /// Returns true if the listing satisfies every predicate.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_text(listing)
            && self.matches_location(listing)
            && self.matches_price(listing)
            && self.matches_amenities(listing)
            && self.matches_rating(listing)
    }

    /// Filters a slice of listings, returning only those that match, in
    /// their original order.
    pub fn filter_listings<'b>(&self, listings: &'b [Listing]) -> Vec<&'b Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }

    /// Checks the name against the search text.
    fn matches_text(&self, listing: &Listing) -> bool {
        self.search_lower.is_empty() || listing.name.to_lowercase().contains(&self.search_lower)
    }

    /// Checks the location against the selected location.
    fn matches_location(&self, listing: &Listing) -> bool {
        match &self.location_lower {
            None => true,
            Some(location) => listing.location.trim().to_lowercase() == *location,
        }
    }

    /// Checks the numeric price against the ceiling.
    fn matches_price(&self, listing: &Listing) -> bool {
        listing.price_amount() <= self.criteria.max_price
    }

    /// Checks that every required amenity is present.
    fn matches_amenities(&self, listing: &Listing) -> bool {
        self.criteria
            .amenities
            .iter()
            .all(|tag| listing.has_amenity(tag))
    }

    /// Checks the rating against the minimum.
    fn matches_rating(&self, listing: &Listing) -> bool {
        match self.criteria.min_rating {
            None => true,
            Some(min) => listing.rating >= min,
        }
    }
}

/// Returns the listings that satisfy all criteria, preserving input order.
///
/// Pure: neither argument is modified and equal inputs give equal output.
pub fn apply<'b>(listings: &'b [Listing], criteria: &FilterCriteria) -> Vec<&'b Listing> {
    FilterEvaluator::new(criteria).filter_listings(listings)
}
