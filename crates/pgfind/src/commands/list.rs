//! List command implementation.
//!
//! Fetches every listing from the source and shows those matching the
//! filters given on the command line.

use pgfind_api::client::ListingsClient;
use pgfind_api::models::Listing;
use pgfind_local::filter::snap_price;
use pgfind_local::{CollectionKind, CollectionStore, FilterEngine};
use tracing::debug;

use super::{CommandContext, Result};
use crate::output::{format_listings_json, format_listings_table, ListingMarks};

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Text the name must contain.
    pub search: Option<String>,
    /// Location to match.
    pub location: Option<String>,
    /// Inclusive price ceiling.
    pub max_price: Option<u64>,
    /// Amenities that must all be present.
    pub amenities: Vec<String>,
    /// Inclusive minimum rating.
    pub min_rating: Option<f64>,
}

/// Builds the filter engine for the given options.
///
/// The price ceiling is clamped to the slider range and rounded down to a
/// slider step.
///
/// # Errors
///
/// Returns a filter error if the minimum rating is out of range.
pub fn build_engine(opts: &ListOptions) -> Result<FilterEngine> {
    let mut engine = FilterEngine::new();

    if let Some(search) = &opts.search {
        engine.set_search_text(search.as_str());
    }
    if let Some(location) = &opts.location {
        engine.set_location(location.as_str());
    }
    if let Some(max_price) = opts.max_price {
        let snapped = snap_price(max_price);
        if snapped != max_price {
            debug!(requested = max_price, snapped, "price ceiling moved onto the slider");
        }
        engine.set_max_price(snapped);
    }
    for amenity in &opts.amenities {
        if !engine.criteria().amenities.contains(amenity) {
            engine.toggle_amenity(amenity);
        }
    }
    engine.set_min_rating(opts.min_rating)?;

    Ok(engine)
}

/// Pairs each listing with its favourites and cart membership.
pub fn mark_listings<'a>(
    store: &CollectionStore,
    listings: &[&'a Listing],
) -> Vec<(&'a Listing, ListingMarks)> {
    let favourites = store.load(CollectionKind::Favourites);
    let cart = store.load(CollectionKind::Cart);

    listings
        .iter()
        .map(|listing| {
            let marks = ListingMarks {
                favourite: favourites.iter().any(|f| f.name == listing.name),
                in_cart: cart.iter().any(|c| c.name == listing.name),
            };
            (*listing, marks)
        })
        .collect()
}

/// Executes the list command.
///
/// A failed fetch is shown as an empty result and then returned as the error.
///
/// # Errors
///
/// Returns an error if the filters are invalid or the fetch fails.
pub async fn execute(
    ctx: &CommandContext,
    opts: &ListOptions,
    client: &ListingsClient,
    store: &CollectionStore,
) -> Result<()> {
    // Validate filters before touching the network
    let engine = build_engine(opts)?;

    if ctx.verbose {
        eprintln!("Fetching listings from {}...", client.table_url());
    }
    let outcome = client.fetch_or_empty().await;
    let visible = engine.apply(&outcome.listings);
    debug!(
        fetched = outcome.listings.len(),
        visible = visible.len(),
        "applied filters"
    );

    let entries = mark_listings(store, &visible);

    if ctx.json_output {
        let output = format_listings_json(&entries, engine.criteria())?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_listings_table(&entries, ctx.use_colors);
        print!("{output}");
    }

    match outcome.error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
