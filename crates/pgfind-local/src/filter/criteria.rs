//! Filter criteria and the option sets the listing view offers.

use serde::{Deserialize, Serialize};

/// Price ceiling used when no price filter has been chosen.
///
/// Listings priced above this are hidden by default; fixtures that expect a
/// cleared filter to keep every listing must stay at or below it.
pub const DEFAULT_MAX_PRICE: u64 = 12_000;

/// Lowest value of the price slider.
pub const PRICE_SLIDER_MIN: u64 = 1_000;

/// Highest value of the price slider.
pub const PRICE_SLIDER_MAX: u64 = 15_000;

/// Slider step.
pub const PRICE_SLIDER_STEP: u64 = 500;

/// Location sentinel meaning "no location constraint".
pub const ALL_LOCATIONS: &str = "all";

/// Locations offered by the location picker.
pub const LOCATION_OPTIONS: [&str; 5] = [ALL_LOCATIONS, "andheri", "bandra", "dadar", "thane"];

/// Amenity checkboxes offered by the filter panel.
pub const AMENITY_OPTIONS: [&str; 6] = [
    "WiFi",
    "Meals",
    "Laundry",
    "Air Conditioning",
    "Gym",
    "Parking",
];

/// Minimum-rating choices, highest first.
pub const RATING_OPTIONS: [u8; 5] = [5, 4, 3, 2, 1];

/// The current set of constraints applied to the listing collection.
///
/// All fields are independent. A default value leaves its predicate
/// unconstrained, except `max_price` which defaults to [`DEFAULT_MAX_PRICE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the listing name.
    pub search_text: String,

    /// Case-insensitive exact match against the location, ignoring
    /// surrounding whitespace; empty or [`ALL_LOCATIONS`] for no constraint.
    pub selected_location: String,

    /// Inclusive upper bound on the monthly price.
    pub max_price: u64,

    /// Amenity tags a listing must all carry. Kept free of duplicates.
    pub amenities: Vec<String>,

    /// Inclusive lower bound on the rating.
    pub min_rating: Option<f64>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_location: String::new(),
            max_price: DEFAULT_MAX_PRICE,
            amenities: Vec::new(),
            min_rating: None,
        }
    }
}

impl FilterCriteria {
    /// Creates criteria with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search text.
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.selected_location = location.into();
        self
    }

    /// Sets the price ceiling.
    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = max_price;
        self
    }

    /// Requires an amenity tag. Adding a tag twice has no effect.
    pub fn with_amenity(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !self.amenities.contains(&tag) {
            self.amenities.push(tag);
        }
        self
    }

    /// Sets the minimum rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Returns true if the location predicate constrains nothing.
    pub fn is_any_location(&self) -> bool {
        let location = self.selected_location.trim();
        location.is_empty() || location.eq_ignore_ascii_case(ALL_LOCATIONS)
    }

    /// Returns true if every field is at its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Clamps a price into the slider range and rounds it down to a step.
///
/// ```
/// use pgfind_local::filter::snap_price;
///
/// assert_eq!(snap_price(7_300), 7_000);
/// assert_eq!(snap_price(200), 1_000);
/// assert_eq!(snap_price(99_000), 15_000);
/// ```
pub fn snap_price(value: u64) -> u64 {
    let clamped = value.clamp(PRICE_SLIDER_MIN, PRICE_SLIDER_MAX);
    clamped - (clamped - PRICE_SLIDER_MIN) % PRICE_SLIDER_STEP
}
