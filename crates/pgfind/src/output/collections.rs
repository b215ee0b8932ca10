//! Favourites and cart output formatting.

use owo_colors::OwoColorize;
use pgfind_api::models::Listing;
use pgfind_local::{format_rupees, summarize, CollectionKind, CollectionSummary};
use serde::Serialize;

use super::helpers::{format_stars, pad, truncate_str};

/// Shown for an empty cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Shown for an empty favourites collection.
pub const EMPTY_FAVOURITES_MESSAGE: &str = "You have no favourite PGs yet.";

const NAME_WIDTH: usize = 24;
const LOCATION_WIDTH: usize = 14;
const PRICE_WIDTH: usize = 16;

/// JSON output structure for a collection.
#[derive(Serialize)]
pub struct CollectionOutput<'a> {
    pub collection: CollectionKind,
    pub items: &'a [Listing],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryOutput>,
}

/// JSON output structure for the cart summary.
#[derive(Serialize)]
pub struct SummaryOutput {
    pub total_items: usize,
    pub estimated_total: u64,
    pub estimated_total_display: String,
}

impl From<CollectionSummary> for SummaryOutput {
    fn from(summary: CollectionSummary) -> Self {
        Self {
            total_items: summary.count,
            estimated_total: summary.total_price,
            estimated_total_display: format_rupees(summary.total_price),
        }
    }
}

fn empty_message(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Favourites => EMPTY_FAVOURITES_MESSAGE,
        CollectionKind::Cart => EMPTY_CART_MESSAGE,
    }
}

fn title(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Favourites => "Favourites",
        CollectionKind::Cart => "Cart",
    }
}

/// Formats a collection as JSON. The cart carries its summary.
pub fn format_collection_json(
    kind: CollectionKind,
    items: &[Listing],
) -> Result<String, serde_json::Error> {
    let summary: Option<SummaryOutput> = match kind {
        CollectionKind::Cart => Some(summarize(items).into()),
        CollectionKind::Favourites => None,
    };
    let output = CollectionOutput {
        collection: kind,
        items,
        summary,
    };
    serde_json::to_string_pretty(&output)
}

/// Formats a collection as a table. The cart ends with its summary.
pub fn format_collection_table(kind: CollectionKind, items: &[Listing], use_colors: bool) -> String {
    if items.is_empty() {
        return format!("{}\n", empty_message(kind));
    }

    let mut output = String::new();
    let heading = format!("{} ({})", title(kind), items.len());
    if use_colors {
        output.push_str(&format!("{}\n\n", heading.green().bold()));
    } else {
        output.push_str(&format!("{heading}\n\n"));
    }

    for listing in items {
        output.push_str(&format!(
            "  {} {} {} {}\n",
            pad(&truncate_str(&listing.name, NAME_WIDTH), NAME_WIDTH),
            pad(&truncate_str(&listing.location, LOCATION_WIDTH), LOCATION_WIDTH),
            pad(&listing.price, PRICE_WIDTH),
            format_stars(listing.rating, use_colors),
        ));
    }

    if kind == CollectionKind::Cart {
        let summary = summarize(items);
        let total = format_rupees(summary.total_price);
        output.push('\n');
        output.push_str(&format!("Total Items: {}\n", summary.count));
        if use_colors {
            output.push_str(&format!("Estimated Total: {}\n", total.bold()));
        } else {
            output.push_str(&format!("Estimated Total: {total}\n"));
        }
    }

    output
}

/// Formats the confirmation line of a collection mutation.
pub fn format_collection_change(
    verb: &str,
    name: &str,
    kind: CollectionKind,
    use_colors: bool,
) -> String {
    let preposition = if verb.eq_ignore_ascii_case("removed") {
        "from"
    } else {
        "to"
    };
    let name = if use_colors {
        name.cyan().to_string()
    } else {
        name.to_string()
    };
    format!("{verb} {name} {preposition} {}", kind.storage_name())
}
