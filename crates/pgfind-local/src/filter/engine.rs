//! Stateful holder of the current filter criteria.

use pgfind_api::models::Listing;
use tracing::debug;

use super::criteria::FilterCriteria;
use super::error::{FilterError, FilterResult};
use super::evaluator::apply;

/// Owns the criteria of one listing view.
///
/// Every field can be set independently and in any order; [`FilterEngine::apply`]
/// evaluates whatever the current combination is. The engine never touches
/// the listing collection, it only borrows it.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    criteria: FilterCriteria,
}

impl FilterEngine {
    /// Creates an engine with default criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine starting from the given criteria.
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    /// Returns the current criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Sets the search text.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
    }

    /// Sets the location; empty or `"all"` removes the constraint.
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.criteria.selected_location = location.into();
    }

    /// Sets the inclusive price ceiling.
    pub fn set_max_price(&mut self, max_price: u64) {
        self.criteria.max_price = max_price;
    }

    /// Adds the amenity if it is not required yet, removes it otherwise.
    ///
    /// Returns true if the amenity is required after the call.
    pub fn toggle_amenity(&mut self, tag: &str) -> bool {
        let amenities = &mut self.criteria.amenities;
        if let Some(pos) = amenities.iter().position(|a| a == tag) {
            amenities.remove(pos);
            false
        } else {
            amenities.push(tag.to_string());
            true
        }
    }

    /// Sets or clears the minimum rating.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidRating`] for values outside `[0, 5]`;
    /// the criteria are left unchanged.
    pub fn set_min_rating(&mut self, rating: Option<f64>) -> FilterResult<()> {
        if let Some(value) = rating {
            if !(0.0..=5.0).contains(&value) {
                return Err(FilterError::invalid_rating(value));
            }
        }
        self.criteria.min_rating = rating;
        Ok(())
    }

    /// Resets every field to its default and returns the new criteria.
    pub fn clear(&mut self) -> &FilterCriteria {
        debug!("clearing filter criteria");
        self.criteria = FilterCriteria::default();
        &self.criteria
    }

    /// Returns the listings visible under the current criteria.
    pub fn apply<'b>(&self, listings: &'b [Listing]) -> Vec<&'b Listing> {
        apply(listings, &self.criteria)
    }
}
