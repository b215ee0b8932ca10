//! Common helper functions for output formatting.

use owo_colors::OwoColorize;
use pgfind_api::models::{filled_stars, STAR_SLOTS};

/// Filled star glyph.
const STAR_FILLED: char = '★';

/// Empty star glyph.
const STAR_EMPTY: char = '☆';

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Renders a rating as five star slots, e.g. `★★★★☆`.
pub fn format_stars(rating: f64, use_colors: bool) -> String {
    let filled = filled_stars(rating);
    let stars: String = std::iter::repeat(STAR_FILLED)
        .take(filled)
        .chain(std::iter::repeat(STAR_EMPTY).take(STAR_SLOTS - filled))
        .collect();

    if use_colors {
        stars.yellow().to_string()
    } else {
        stars
    }
}

/// Formats amenity tags for a table cell.
pub fn format_amenities(amenities: &[String], max_len: usize) -> String {
    truncate_str(&amenities.join(", "), max_len)
}

/// Pads a string to `width` characters, counting chars rather than bytes.
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("Sunrise Residency PG", 10), "Sunrise...");
    }

    #[test]
    fn test_truncate_str_multibyte() {
        assert_eq!(truncate_str("₹₹₹₹₹₹₹₹", 5), "₹₹...");
    }

    #[test]
    fn test_format_stars() {
        assert_eq!(format_stars(3.8, false), "★★★☆☆");
        assert_eq!(format_stars(5.0, false), "★★★★★");
        assert_eq!(format_stars(0.0, false), "☆☆☆☆☆");
        assert_eq!(format_stars(9.0, false).chars().count(), STAR_SLOTS);
    }

    #[test]
    fn test_format_amenities() {
        let tags = vec!["WiFi".to_string(), "Meals".to_string()];
        assert_eq!(format_amenities(&tags, 40), "WiFi, Meals");
        assert_eq!(format_amenities(&[], 40), "");
    }

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(pad("₹500", 6), "₹500  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
