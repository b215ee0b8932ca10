//! Cart command implementations.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;
use pgfind_api::client::ListingsClient;
use pgfind_local::{summarize, CollectionKind, CollectionStore};

use super::lookups::find_listing;
use super::{CommandContext, CommandError, Result};
use crate::output::{format_collection_change, format_collection_json, format_collection_table};

const KIND: CollectionKind = CollectionKind::Cart;

/// Executes `cart list`, including the item count and estimated total.
pub fn execute_list(ctx: &CommandContext, store: &CollectionStore) -> Result<()> {
    let cart = store.load(KIND);

    if ctx.json_output {
        println!("{}", format_collection_json(KIND, &cart)?);
    } else if !ctx.quiet {
        print!("{}", format_collection_table(KIND, &cart, ctx.use_colors));
    }

    Ok(())
}

/// Executes `cart add <name>`.
///
/// # Errors
///
/// Returns an error if the listing cannot be found or the cart cannot be saved.
pub async fn execute_add(
    ctx: &CommandContext,
    name: &str,
    client: &ListingsClient,
    store: &CollectionStore,
) -> Result<()> {
    let existing = store.load(KIND);
    let (listing, already_present) = match find_listing(&existing, name) {
        Ok(saved) => (saved.clone(), true),
        Err(_) => {
            let listings = client.fetch_listings().await?;
            (find_listing(&listings, name)?.clone(), false)
        }
    };
    let cart = store.add(KIND, &listing)?;
    let summary = summarize(&cart);

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "action": if already_present { "unchanged" } else { "added" },
            "name": listing.name,
            "total_items": summary.count,
            "estimated_total": summary.total_price,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        if already_present {
            println!("{} is already in your cart.", listing.name);
        } else {
            println!(
                "{}",
                format_collection_change("Added", &listing.name, KIND, ctx.use_colors)
            );
        }
    }

    Ok(())
}

/// Executes `cart remove <name>`.
///
/// # Errors
///
/// Returns `CommandError::NotFound` if the cart holds no such listing.
pub fn execute_remove(ctx: &CommandContext, name: &str, store: &CollectionStore) -> Result<()> {
    let existing = store.load(KIND);
    let target = find_listing(&existing, name)?.name.clone();
    let cart = store.remove(KIND, &target)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "name": target,
            "total_items": cart.len(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!(
            "{}",
            format_collection_change("Removed", &target, KIND, ctx.use_colors)
        );
    }

    Ok(())
}

/// Asks whether the cart may be cleared.
///
/// Without a terminal there is nobody to ask, so the request is refused.
fn confirm_clear(count: usize) -> Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(CommandError::Config(
            "Refusing to clear the cart without confirmation. Use --force to confirm.".to_string(),
        ));
    }

    Confirm::new()
        .with_prompt(format!("Remove all {count} item(s) from your cart?"))
        .default(false)
        .interact()
        .map_err(|e| CommandError::Io(io::Error::other(e.to_string())))
}

/// Executes `cart clear`.
///
/// A non-empty cart is only cleared after confirmation unless `force` is set.
pub fn execute_clear(ctx: &CommandContext, force: bool, store: &CollectionStore) -> Result<()> {
    let count = store.load(KIND).len();

    if count > 0 && !force && !confirm_clear(count)? {
        if !ctx.quiet {
            eprintln!("Aborted.");
        }
        return Ok(());
    }

    store.clear(KIND)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "removed": count,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Cart cleared ({count} item(s) removed).");
    }

    Ok(())
}
