//! Raw rows as stored in the remote listings table.

use serde::Deserialize;
use serde_json::Value;

use super::listing::{
    amenity_tags, coerce_rating, default_features, default_image, format_price, Listing,
    UNKNOWN_LOCATION,
};

/// A row of the listings table, before normalization.
///
/// Column names follow the table schema. Columns are loosely typed on the
/// source side (prices and ratings arrive as numbers or strings), so every
/// field is kept as a JSON value until [`ListingRow::into_listing`] coerces it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingRow {
    #[serde(rename = "PG_Name", default)]
    pub pg_name: Value,

    #[serde(rename = "Address", default)]
    pub address: Value,

    #[serde(rename = "Rent_Price", default)]
    pub rent_price: Value,

    /// Free-text amenities description.
    #[serde(rename = "Amenities", default)]
    pub amenities_text: Value,

    /// Amenity tags.
    #[serde(rename = "amenities", default)]
    pub amenities: Value,

    #[serde(rename = "img", default)]
    pub img: Value,

    #[serde(rename = "Rating", default)]
    pub rating: Value,
}

impl ListingRow {
    /// Normalizes the row into a [`Listing`], substituting defaults for
    /// absent or unusable fields.
    pub fn into_listing(self) -> Listing {
        let amenities_text = non_empty_text(&self.amenities_text);

        // Rows without a tag column fall back to splitting the description.
        let amenities = if self.amenities.is_null() {
            amenities_text
                .as_deref()
                .map(|text| amenity_tags(&Value::String(text.to_string())))
                .unwrap_or_default()
        } else {
            amenity_tags(&self.amenities)
        };

        Listing {
            name: non_empty_text(&self.pg_name).unwrap_or_default(),
            location: non_empty_text(&self.address)
                .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            price: format_price(non_empty_text(&self.rent_price).unwrap_or_default()),
            features: amenities_text.unwrap_or_else(default_features),
            amenities,
            image: non_empty_text(&self.img).unwrap_or_else(default_image),
            rating: coerce_rating(&self.rating),
        }
    }
}

impl From<ListingRow> for Listing {
    fn from(row: ListingRow) -> Self {
        row.into_listing()
    }
}

/// Renders a scalar column as text; empty strings, null and containers count
/// as absent. Arrays of strings are joined for display.
fn non_empty_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}
