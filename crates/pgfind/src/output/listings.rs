//! Listing output formatting.

use owo_colors::OwoColorize;
use pgfind_api::models::Listing;
use pgfind_local::FilterCriteria;
use serde::Serialize;

use super::helpers::{format_amenities, format_stars, pad, truncate_str};

/// Shown when no listing passes the filters.
pub const EMPTY_LISTINGS_MESSAGE: &str = "No PGs found matching your filters.";

const NAME_WIDTH: usize = 24;
const LOCATION_WIDTH: usize = 14;
const PRICE_WIDTH: usize = 16;
const AMENITIES_WIDTH: usize = 32;

/// Collection membership of a listing, shown next to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingMarks {
    pub favourite: bool,
    pub in_cart: bool,
}

/// JSON output structure for list command.
#[derive(Serialize)]
pub struct ListOutput<'a> {
    pub listings: Vec<ListingOutput<'a>>,
    pub count: usize,
    pub criteria: &'a FilterCriteria,
}

/// JSON output structure for a single listing.
#[derive(Serialize)]
pub struct ListingOutput<'a> {
    pub name: &'a str,
    pub location: &'a str,
    pub price: &'a str,
    pub price_amount: u64,
    pub rating: f64,
    pub amenities: &'a [String],
    pub favourite: bool,
    pub in_cart: bool,
}

/// JSON output structure for listing details (show command).
#[derive(Serialize)]
pub struct ListingDetailsOutput<'a> {
    #[serde(flatten)]
    pub listing: ListingOutput<'a>,
    pub features: &'a str,
    pub image: &'a str,
    pub stars: usize,
}

impl<'a> ListingOutput<'a> {
    fn new(listing: &'a Listing, marks: ListingMarks) -> Self {
        Self {
            name: &listing.name,
            location: &listing.location,
            price: &listing.price,
            price_amount: listing.price_amount(),
            rating: listing.rating,
            amenities: &listing.amenities,
            favourite: marks.favourite,
            in_cart: marks.in_cart,
        }
    }
}

/// Formats filtered listings as JSON.
pub fn format_listings_json(
    entries: &[(&Listing, ListingMarks)],
    criteria: &FilterCriteria,
) -> Result<String, serde_json::Error> {
    let output = ListOutput {
        listings: entries
            .iter()
            .map(|(listing, marks)| ListingOutput::new(listing, *marks))
            .collect(),
        count: entries.len(),
        criteria,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats filtered listings as a table.
pub fn format_listings_table(entries: &[(&Listing, ListingMarks)], use_colors: bool) -> String {
    if entries.is_empty() {
        return format!("{EMPTY_LISTINGS_MESSAGE}\n");
    }

    let mut output = String::new();

    let header = format!(
        "  {} {} {} {:<5} {}",
        pad("NAME", NAME_WIDTH),
        pad("LOCATION", LOCATION_WIDTH),
        pad("PRICE", PRICE_WIDTH),
        "RATING",
        "AMENITIES"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.bold()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for (listing, marks) in entries {
        let marker = if marks.favourite { "♥" } else { " " };
        let marker = if use_colors && marks.favourite {
            marker.red().to_string()
        } else {
            marker.to_string()
        };

        let name = pad(&truncate_str(&listing.name, NAME_WIDTH), NAME_WIDTH);
        let name = if use_colors && marks.in_cart {
            name.cyan().to_string()
        } else {
            name
        };

        output.push_str(&format!(
            "{} {} {} {} {} {}\n",
            marker,
            name,
            pad(&truncate_str(&listing.location, LOCATION_WIDTH), LOCATION_WIDTH),
            pad(&listing.price, PRICE_WIDTH),
            format_stars(listing.rating, use_colors),
            format_amenities(&listing.amenities, AMENITIES_WIDTH),
        ));
    }

    output
}

/// Formats one listing as JSON.
pub fn format_listing_details_json(
    listing: &Listing,
    marks: ListingMarks,
) -> Result<String, serde_json::Error> {
    let output = ListingDetailsOutput {
        listing: ListingOutput::new(listing, marks),
        features: &listing.features,
        image: &listing.image,
        stars: listing.filled_stars(),
    };
    serde_json::to_string_pretty(&output)
}

/// Formats one listing for the show command.
pub fn format_listing_details_table(
    listing: &Listing,
    marks: ListingMarks,
    use_colors: bool,
) -> String {
    let mut output = String::new();

    if use_colors {
        output.push_str(&format!("{}\n", listing.name.bold()));
    } else {
        output.push_str(&format!("{}\n", listing.name));
    }
    output.push_str(&format!("{}\n\n", "─".repeat(listing.name.chars().count().max(1))));

    output.push_str(&format!("Location:  {}\n", listing.location));
    output.push_str(&format!("Price:     {}\n", listing.price));
    output.push_str(&format!(
        "Rating:    {} ({:.1})\n",
        format_stars(listing.rating, use_colors),
        listing.rating
    ));
    output.push_str(&format!("Features:  {}\n", listing.features));
    if !listing.amenities.is_empty() {
        output.push_str(&format!("Amenities: {}\n", listing.amenities.join(", ")));
    }
    output.push_str(&format!("Image:     {}\n", listing.image));

    let mut membership = Vec::new();
    if marks.favourite {
        membership.push("favourites");
    }
    if marks.in_cart {
        membership.push("cart");
    }
    if !membership.is_empty() {
        output.push_str(&format!("\nIn your {}.\n", membership.join(" and ")));
    }

    output
}
