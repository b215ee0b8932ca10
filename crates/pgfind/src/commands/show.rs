//! Show command implementation.
//!
//! Displays a single listing looked up by name.

use pgfind_api::client::ListingsClient;
use pgfind_local::CollectionStore;

use super::list::mark_listings;
use super::lookups::find_listing;
use super::{CommandContext, Result};
use crate::output::{format_listing_details_json, format_listing_details_table};

/// Executes the show command.
///
/// # Errors
///
/// Returns an error if the fetch fails or no listing has this name.
pub async fn execute(
    ctx: &CommandContext,
    name: &str,
    client: &ListingsClient,
    store: &CollectionStore,
) -> Result<()> {
    if ctx.verbose {
        eprintln!("Fetching listings from {}...", client.table_url());
    }
    let listings = client.fetch_listings().await?;
    let listing = find_listing(&listings, name)?;
    let (_, marks) = mark_listings(store, &[listing])
        .into_iter()
        .next()
        .unwrap_or((listing, Default::default()));

    if ctx.json_output {
        let output = format_listing_details_json(listing, marks)?;
        println!("{output}");
    } else if !ctx.quiet {
        let output = format_listing_details_table(listing, marks, ctx.use_colors);
        print!("{output}");
    }

    Ok(())
}
