//! Collection-level tests for the filter engine.

use pgfind_api::models::Listing;

use super::*;

fn fixture() -> Vec<Listing> {
    vec![
        Listing::new("Sunrise PG", "Andheri", "₹8,500/month")
            .with_amenities(["WiFi", "Meals"])
            .with_rating(4.5),
        Listing::new("Parkview PG", "Bandra", "₹11,000/month")
            .with_amenities(["WiFi", "Gym", "Parking"])
            .with_rating(3.9),
        Listing::new("Harbour Stay", "Dadar", "₹6,000/month").with_rating(2.5),
        Listing::new("Lakeside Rooms", "Thane", "₹12,000/month")
            .with_amenities(["Laundry"])
            .with_rating(5.0),
        Listing::new("Budget Beds", "Andheri", "price on request"),
    ]
}

/// Returns true if `sub` appears in `all` in the same relative order.
fn is_ordered_subsequence(sub: &[&Listing], all: &[Listing]) -> bool {
    let mut remaining = all.iter();
    sub.iter()
        .all(|wanted| remaining.by_ref().any(|candidate| candidate == *wanted))
}

// ==================== Ordering ====================

#[test]
fn test_result_is_ordered_subsequence_for_every_criteria() {
    let listings = fixture();
    let criteria_set = vec![
        FilterCriteria::new(),
        FilterCriteria::new().with_search_text("pg"),
        FilterCriteria::new().with_location("andheri"),
        FilterCriteria::new().with_max_price(8_500),
        FilterCriteria::new().with_amenity("WiFi"),
        FilterCriteria::new().with_min_rating(4.0),
        FilterCriteria::new()
            .with_search_text("e")
            .with_max_price(15_000)
            .with_min_rating(2.0),
    ];

    for criteria in &criteria_set {
        let result = apply(&listings, criteria);
        assert!(
            is_ordered_subsequence(&result, &listings),
            "not an ordered subsequence for {:?}",
            criteria
        );
    }
}

// ==================== Cleared criteria ====================

#[test]
fn test_cleared_criteria_keep_everything_under_default_ceiling() {
    let listings = fixture();
    assert!(listings.iter().all(|l| l.price_amount() <= DEFAULT_MAX_PRICE));

    let mut engine = FilterEngine::new();
    engine.set_search_text("zzz");
    engine.toggle_amenity("Gym");
    assert!(engine.apply(&listings).is_empty());

    let cleared = engine.clear().clone();
    let result = apply(&listings, &cleared);

    let expected: Vec<&Listing> = listings.iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn test_default_ceiling_hides_more_expensive_listings() {
    let mut listings = fixture();
    listings.push(Listing::new("Penthouse PG", "Bandra", "₹14,500/month"));

    let result = apply(&listings, &FilterCriteria::default());

    assert_eq!(result.len(), listings.len() - 1);
    assert!(result.iter().all(|l| l.name != "Penthouse PG"));
}

// ==================== Purity ====================

#[test]
fn test_apply_is_pure() {
    let listings = fixture();
    let snapshot = listings.clone();
    let criteria = FilterCriteria::new().with_amenity("WiFi").with_min_rating(4.0);
    let criteria_snapshot = criteria.clone();

    let first: Vec<Listing> = apply(&listings, &criteria).into_iter().cloned().collect();
    let second: Vec<Listing> = apply(&listings, &criteria).into_iter().cloned().collect();

    assert_eq!(first, second);
    assert_eq!(listings, snapshot);
    assert_eq!(criteria, criteria_snapshot);
}

// ==================== Scenarios ====================

#[test]
fn test_search_park_matches_parkview() {
    let listings = fixture();
    let result = apply(&listings, &FilterCriteria::new().with_search_text("park"));

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Parkview PG");
}

#[test]
fn test_wifi_and_gym_required() {
    let listings = fixture();
    let criteria = FilterCriteria::new().with_amenity("WiFi").with_amenity("Gym");

    let names: Vec<&str> = apply(&listings, &criteria)
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(names, vec!["Parkview PG"]);
}

#[test]
fn test_location_and_rating_combined() {
    let listings = fixture();
    let criteria = FilterCriteria::new()
        .with_location("ANDHERI")
        .with_min_rating(3.0);

    let names: Vec<&str> = apply(&listings, &criteria)
        .iter()
        .map(|l| l.name.as_str())
        .collect();
    // Budget Beds has the default rating of 3.0, which meets the bound.
    assert_eq!(names, vec!["Sunrise PG", "Budget Beds"]);
}

#[test]
fn test_no_match_yields_empty() {
    let listings = fixture();
    let criteria = FilterCriteria::new()
        .with_location("thane")
        .with_amenity("WiFi");

    assert!(apply(&listings, &criteria).is_empty());
}

#[test]
fn test_empty_collection() {
    assert!(apply(&[], &FilterCriteria::new()).is_empty());
}
