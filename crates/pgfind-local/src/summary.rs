//! Aggregates shown alongside a collection.

use pgfind_api::models::Listing;
use serde::Serialize;

/// Item count and summed monthly price of a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub count: usize,
    pub total_price: u64,
}

/// Summarizes a collection. Unparseable prices count as zero.
pub fn summarize(listings: &[Listing]) -> CollectionSummary {
    CollectionSummary {
        count: listings.len(),
        total_price: listings
            .iter()
            .fold(0u64, |total, l| total.saturating_add(l.price_amount())),
    }
}

/// Formats an amount as rupees with thousands separators.
///
/// ```
/// use pgfind_local::summary::format_rupees;
///
/// assert_eq!(format_rupees(5_500), "₹5,500");
/// assert_eq!(format_rupees(1_234_567), "₹1,234,567");
/// ```
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    grouped.push('₹');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection() {
        assert_eq!(
            summarize(&[]),
            CollectionSummary {
                count: 0,
                total_price: 0
            }
        );
    }

    #[test]
    fn test_two_items() {
        let listings = vec![
            Listing::new("A", "X", "₹3,000/month"),
            Listing::new("B", "X", "₹2,500/month"),
        ];
        assert_eq!(
            summarize(&listings),
            CollectionSummary {
                count: 2,
                total_price: 5_500
            }
        );
    }

    #[test]
    fn test_unparseable_price_counts_zero() {
        let listings = vec![
            Listing::new("A", "X", "on request"),
            Listing::new("B", "X", "₹4,000/month"),
        ];
        assert_eq!(summarize(&listings).total_price, 4_000);
    }

    #[test]
    fn test_total_saturates() {
        let listings = vec![
            Listing::new("A", "X", &format!("₹{}/month", u64::MAX)),
            Listing::new("B", "X", "₹1/month"),
        ];
        assert_eq!(summarize(&listings).total_price, u64::MAX);
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(1_000), "₹1,000");
        assert_eq!(format_rupees(12_000), "₹12,000");
    }
}
