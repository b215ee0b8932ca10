//! The canonical listing record.

use serde::{Deserialize, Deserializer, Serialize};

/// Location used when a row carries no address.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Features text used when a row carries no amenities description.
pub const DEFAULT_FEATURES: &str = "Basic Amenities";

/// Image shown for listings without a picture of their own.
pub const PLACEHOLDER_IMAGE: &str =
    "https://www.hostelworld.com/blog/wp-content/uploads/2018/06/hostel-room-types-5.jpg";

/// Rating assumed when the source value is missing or unreadable.
pub const DEFAULT_RATING: f64 = 3.0;

/// Highest possible rating.
pub const MAX_RATING: f64 = 5.0;

/// Number of star slots a rating is rendered into.
pub const STAR_SLOTS: usize = 5;

/// A rental listing.
///
/// `name` is the identity of a listing: two listings with the same name are
/// the same listing as far as favourites and the cart are concerned.
///
/// Deserialization is lenient so records written by older clients still load:
/// missing fields take their defaults and `amenities` may be a list, a
/// comma-separated string or null.
///
/// # Example
///
/// ```
/// use pgfind_api::models::Listing;
///
/// let listing = Listing::new("Sunrise PG", "Andheri", "₹8,500/month")
///     .with_amenities(["WiFi", "Meals"])
///     .with_rating(4.6);
///
/// assert_eq!(listing.price_amount(), 8500);
/// assert_eq!(listing.filled_stars(), 4);
/// assert!(listing.has_amenity("WiFi"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Listing name, unique across every collection.
    pub name: String,

    /// Free-text address or area.
    #[serde(default = "default_location")]
    pub location: String,

    /// Display price, `₹<amount>/month`.
    #[serde(default)]
    pub price: String,

    /// Free-text description of the amenities.
    #[serde(default = "default_features")]
    pub features: String,

    /// Amenity tags, in source order.
    #[serde(default, deserialize_with = "deserialize_amenities")]
    pub amenities: Vec<String>,

    /// Picture URL.
    #[serde(default = "default_image")]
    pub image: String,

    /// Rating between 0 and 5.
    #[serde(default = "default_rating", deserialize_with = "deserialize_rating")]
    pub rating: f64,
}

fn default_location() -> String {
    UNKNOWN_LOCATION.to_string()
}

pub(crate) fn default_features() -> String {
    DEFAULT_FEATURES.to_string()
}

pub(crate) fn default_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

fn default_rating() -> f64 {
    DEFAULT_RATING
}

fn deserialize_amenities<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(amenity_tags(&value))
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_rating(&value))
}

impl Listing {
    /// Creates a listing with default features, image, rating and no amenities.
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            price: price.into(),
            features: default_features(),
            amenities: Vec::new(),
            image: default_image(),
            rating: DEFAULT_RATING,
        }
    }

    /// Replaces the amenity tags.
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the rating, clamped to `[0, 5]`.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = clamp_rating(rating);
        self
    }

    /// Returns the numeric monthly price.
    ///
    /// Unparseable prices count as `0`.
    pub fn price_amount(&self) -> u64 {
        parse_price_amount(&self.price)
    }

    /// Returns how many of the [`STAR_SLOTS`] stars are filled.
    pub fn filled_stars(&self) -> usize {
        filled_stars(self.rating)
    }

    /// Returns true if the listing carries the given amenity tag.
    pub fn has_amenity(&self, tag: &str) -> bool {
        self.amenities.iter().any(|a| a == tag)
    }
}

/// Extracts the amount from a price string by keeping only ASCII digits.
///
/// Returns `0` when no digits remain or the amount does not fit in a `u64`.
///
/// ```
/// use pgfind_api::models::parse_price_amount;
///
/// assert_eq!(parse_price_amount("₹2,000/month"), 2000);
/// assert_eq!(parse_price_amount("on request"), 0);
/// ```
pub fn parse_price_amount(price: &str) -> u64 {
    let digits: String = price.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Formats a monthly amount the way the source displays prices.
pub fn format_price(amount: impl std::fmt::Display) -> String {
    format!("₹{}/month", amount)
}

/// Number of filled stars for a rating: floor, clamped to `[0, 5]`.
pub fn filled_stars(rating: f64) -> usize {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    (rating.floor() as usize).min(STAR_SLOTS)
}

/// Coerces a loosely typed rating into `[0, 5]`, defaulting to 3.
///
/// Numbers are used directly; strings contribute their leading numeric part
/// (`"4.5 stars"` reads as 4.5). Anything else yields [`DEFAULT_RATING`].
pub fn coerce_rating(value: &serde_json::Value) -> f64 {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => leading_float(s),
        _ => None,
    };
    match parsed {
        Some(rating) if rating.is_finite() => clamp_rating(rating),
        _ => DEFAULT_RATING,
    }
}

/// Coerces a loosely typed amenities value into a tag list.
///
/// Arrays keep their string entries, strings are split on commas, anything
/// else is treated as no amenities.
pub fn amenity_tags(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str())
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        serde_json::Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return DEFAULT_RATING;
    }
    rating.clamp(0.0, MAX_RATING)
}

/// Parses the longest leading `[+-]digits[.digits][e[+-]digits]` prefix of a
/// string, so `"4.5 stars"` reads as 4.5 and `"1e5"` as 100000.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+' | b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut seen_digit = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        seen_digit |= frac_end > end + 1;
        end = frac_end;
    }
    if !seen_digit {
        return None;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_price_amount_formatted() {
        assert_eq!(parse_price_amount("₹2,000/month"), 2000);
        assert_eq!(parse_price_amount("₹3,500/month"), 3500);
        assert_eq!(parse_price_amount("₹12000/month"), 12000);
    }

    #[test]
    fn test_parse_price_amount_unparseable_is_zero() {
        assert_eq!(parse_price_amount(""), 0);
        assert_eq!(parse_price_amount("₹undefined/month"), 0);
        assert_eq!(parse_price_amount("₹99999999999999999999999/month"), 0);
    }

    #[test]
    fn test_filled_stars_floor_and_clamp() {
        assert_eq!(filled_stars(4.9), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(7.0), 5);
        assert_eq!(filled_stars(0.5), 0);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(f64::NAN), 0);
    }

    #[test]
    fn test_coerce_rating() {
        assert_eq!(coerce_rating(&json!(4.5)), 4.5);
        assert_eq!(coerce_rating(&json!("4.2")), 4.2);
        assert_eq!(coerce_rating(&json!("3.8 stars")), 3.8);
        assert_eq!(coerce_rating(&json!("great")), DEFAULT_RATING);
        assert_eq!(coerce_rating(&json!(null)), DEFAULT_RATING);
        assert_eq!(coerce_rating(&json!(9)), MAX_RATING);
        assert_eq!(coerce_rating(&json!(-2)), 0.0);
        assert_eq!(coerce_rating(&json!("1e5")), MAX_RATING);
        assert_eq!(coerce_rating(&json!("4e-1")), 0.4);
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("4."), Some(4.0));
        assert_eq!(leading_float("  -1.5x"), Some(-1.5));
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float(""), None);
        assert_eq!(leading_float(".5"), Some(0.5));
    }

    #[test]
    fn test_leading_float_exponent() {
        assert_eq!(leading_float("1e5"), Some(100_000.0));
        assert_eq!(leading_float("2.5E+1 points"), Some(25.0));
        assert_eq!(leading_float("3e-1"), Some(0.3));
        // No exponent digits: the mantissa stands alone
        assert_eq!(leading_float("4e"), Some(4.0));
        assert_eq!(leading_float("4e+x"), Some(4.0));
        assert_eq!(leading_float("e5"), None);
    }

    #[test]
    fn test_amenity_tags_from_array_and_string() {
        assert_eq!(
            amenity_tags(&json!(["WiFi", "Gym", 3, " Parking "])),
            vec!["WiFi", "Gym", "Parking"]
        );
        assert_eq!(
            amenity_tags(&json!("WiFi, Meals,,Laundry")),
            vec!["WiFi", "Meals", "Laundry"]
        );
        assert!(amenity_tags(&json!(null)).is_empty());
        assert!(amenity_tags(&json!({"WiFi": true})).is_empty());
    }

    #[test]
    fn test_listing_deserialize_minimal_record() {
        let listing: Listing = serde_json::from_str(r#"{"name": "Sunrise PG"}"#).unwrap();

        assert_eq!(listing.name, "Sunrise PG");
        assert_eq!(listing.location, UNKNOWN_LOCATION);
        assert_eq!(listing.features, DEFAULT_FEATURES);
        assert_eq!(listing.image, PLACEHOLDER_IMAGE);
        assert_eq!(listing.rating, DEFAULT_RATING);
        assert!(listing.amenities.is_empty());
        assert_eq!(listing.price_amount(), 0);
    }

    #[test]
    fn test_listing_deserialize_loose_fields() {
        let listing: Listing = serde_json::from_value(json!({
            "name": "Parkview PG",
            "location": "Bandra",
            "price": "₹9,000/month",
            "amenities": "WiFi, Gym",
            "rating": "4.1",
            "liked": false
        }))
        .unwrap();

        assert_eq!(listing.amenities, vec!["WiFi", "Gym"]);
        assert_eq!(listing.rating, 4.1);
        assert_eq!(listing.price_amount(), 9000);
    }

    #[test]
    fn test_listing_serde_roundtrip() {
        let listing = Listing::new("Sunrise PG", "Andheri", "₹8,500/month")
            .with_amenities(["WiFi", "Meals"])
            .with_rating(4.5);

        let json = serde_json::to_string(&listing).unwrap();
        let restored: Listing = serde_json::from_str(&json).unwrap();
        assert_eq!(listing, restored);
    }

    #[test]
    fn test_with_rating_clamps() {
        let listing = Listing::new("A", "B", "₹1/month").with_rating(11.0);
        assert_eq!(listing.rating, MAX_RATING);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(8500), "₹8500/month");
    }
}
