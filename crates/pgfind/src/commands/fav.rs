//! Favourites command implementations.

use pgfind_api::client::ListingsClient;
use pgfind_api::models::Listing;
use pgfind_local::{CollectionKind, CollectionStore};

use super::lookups::find_listing;
use super::{CommandContext, Result};
use crate::output::{format_collection_change, format_collection_json, format_collection_table};

const KIND: CollectionKind = CollectionKind::Favourites;

/// Executes `fav list`.
pub fn execute_list(ctx: &CommandContext, store: &CollectionStore) -> Result<()> {
    let favourites = store.load(KIND);

    if ctx.json_output {
        println!("{}", format_collection_json(KIND, &favourites)?);
    } else if !ctx.quiet {
        print!("{}", format_collection_table(KIND, &favourites, ctx.use_colors));
    }

    Ok(())
}

/// Resolves the listing to toggle.
///
/// A saved favourite is found locally so it can be removed even when the
/// source no longer lists it; anything else is looked up in the source.
async fn resolve_listing(
    name: &str,
    client: &ListingsClient,
    store: &CollectionStore,
) -> Result<Listing> {
    let favourites = store.load(KIND);
    if let Ok(saved) = find_listing(&favourites, name) {
        return Ok(saved.clone());
    }

    let listings = client.fetch_listings().await?;
    Ok(find_listing(&listings, name)?.clone())
}

/// Executes `fav toggle <name>`.
///
/// # Errors
///
/// Returns an error if the listing cannot be found or the result cannot be saved.
pub async fn execute_toggle(
    ctx: &CommandContext,
    name: &str,
    client: &ListingsClient,
    store: &CollectionStore,
) -> Result<()> {
    let listing = resolve_listing(name, client, store).await?;
    let favourites = store.toggle(KIND, &listing)?;
    let added = favourites.iter().any(|l| l.name == listing.name);

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "action": if added { "added" } else { "removed" },
            "name": listing.name,
            "count": favourites.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        let verb = if added { "Added" } else { "Removed" };
        println!(
            "{}",
            format_collection_change(verb, &listing.name, KIND, ctx.use_colors)
        );
    }

    Ok(())
}

/// Executes `fav clear`.
pub fn execute_clear(ctx: &CommandContext, store: &CollectionStore) -> Result<()> {
    let removed = store.load(KIND).len();
    store.clear(KIND)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "removed": removed,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Cleared {removed} favourite(s).");
    }

    Ok(())
}
