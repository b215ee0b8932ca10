//! Name-based listing lookups with "did you mean" suggestions.

use pgfind_api::models::Listing;
use strsim::levenshtein;

use super::CommandError;

/// Maximum Levenshtein distance for a name to be suggested.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Finds the best matching name from a list of candidates using Levenshtein distance.
///
/// Returns the best match if its edit distance is within the threshold,
/// otherwise returns `None`.
pub fn find_similar_name<'a>(
    query: &str,
    candidates: impl Iterator<Item = &'a str>,
) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = candidates
        .filter(|name| !name.is_empty())
        .map(|name| {
            let distance = levenshtein(&query_lower, &name.to_lowercase());
            (name.to_string(), distance)
        })
        .min_by_key(|(_, d)| *d)?;

    // Only suggest if the distance is within threshold and not an exact match
    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match)
    } else {
        None
    }
}

/// Finds a listing by name.
///
/// An exact match wins; otherwise a single case-insensitive match is accepted.
///
/// # Errors
///
/// Returns `CommandError::NotFound`, with a suggestion when a similar name exists.
pub fn find_listing<'a>(listings: &'a [Listing], name: &str) -> Result<&'a Listing, CommandError> {
    if let Some(listing) = listings.iter().find(|l| l.name == name) {
        return Ok(listing);
    }

    let mut folded = listings.iter().filter(|l| l.name.eq_ignore_ascii_case(name));
    if let (Some(listing), None) = (folded.next(), folded.next()) {
        return Ok(listing);
    }

    Err(CommandError::NotFound {
        name: name.to_string(),
        suggestion: find_similar_name(name, listings.iter().map(|l| l.name.as_str())),
    })
}
