//! # Hotel Catalog
//!
//! Browse list: the bundled sample hotels, text search and sort.
//!
//! ## Explore Screen Pipeline
//! ```text
//! sample_hotels() ──► filter(query on name | location) ──► sort(option)
//!                                                              │
//!                                  results_label(n) ◄──────────┘
//!                                  "3 Hotels Found"
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Hotel;

// =============================================================================
// Sort Option
// =============================================================================

/// Ordering of the browse list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Highest rated first.
    #[default]
    Rating,
    /// Cheapest first.
    Price,
    /// Alphabetical, ignoring case.
    Name,
}

impl SortOption {
    fn compare(&self, a: &Hotel, b: &Hotel) -> Ordering {
        match self {
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::Price => a.price_per_night_cents.cmp(&b.price_per_night_cents),
            SortOption::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Rating => write!(f, "rating"),
            SortOption::Price => write!(f, "price"),
            SortOption::Name => write!(f, "name"),
        }
    }
}

impl FromStr for SortOption {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" | "stars" => Ok(SortOption::Rating),
            "price" | "cheapest" => Ok(SortOption::Price),
            "name" | "alpha" => Ok(SortOption::Name),
            other => Err(ValidationError::InvalidFormat {
                field: "sort".to_string(),
                reason: format!("unknown sort option '{other}', expected rating, price or name"),
            }),
        }
    }
}

// =============================================================================
// Search
// =============================================================================

/// Filters by case-insensitive substring on name or location, then sorts.
///
/// An empty (or all-whitespace) query keeps every hotel. The sort is stable,
/// so hotels that compare equal keep catalog order.
///
/// ## Example
/// ```rust
/// use stayhub_core::catalog::{sample_hotels, search_hotels, SortOption};
///
/// let hotels = sample_hotels();
/// let found = search_hotels(&hotels, "durban", SortOption::Price);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Sunset Lodge");
/// ```
pub fn search_hotels(hotels: &[Hotel], query: &str, sort: SortOption) -> Vec<Hotel> {
    let needle = query.trim().to_lowercase();

    let mut results: Vec<Hotel> = hotels
        .iter()
        .filter(|hotel| {
            needle.is_empty()
                || hotel.name.to_lowercase().contains(&needle)
                || hotel.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    results.sort_by(|a, b| sort.compare(a, b));
    results
}

/// Heading above the result list.
pub fn results_label(count: usize) -> String {
    match count {
        1 => "1 Hotel Found".to_string(),
        n => format!("{n} Hotels Found"),
    }
}

/// Looks a hotel up by id.
pub fn find_hotel<'a>(hotels: &'a [Hotel], id: &str) -> CoreResult<&'a Hotel> {
    hotels
        .iter()
        .find(|hotel| hotel.id == id)
        .ok_or_else(|| CoreError::HotelNotFound(id.to_string()))
}

// =============================================================================
// Sample Data
// =============================================================================

fn hotel(
    id: &str,
    name: &str,
    location: &str,
    rating: f32,
    price_rand: i64,
    image_url: &str,
    amenities: &[&str],
) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        rating,
        price_per_night_cents: Money::from_major(price_rand).cents(),
        image_url: image_url.to_string(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

/// The hotels bundled with the app.
pub fn sample_hotels() -> Vec<Hotel> {
    vec![
        hotel(
            "1",
            "The Royal Hotel",
            "Cape Town",
            4.8,
            2200,
            "https://images.unsplash.com/photo-1566073771259-6a8506099945",
            &["wifi", "pool", "spa"],
        ),
        hotel(
            "2",
            "Sunset Lodge",
            "Durban",
            4.5,
            1500,
            "https://images.unsplash.com/photo-1501117716987-c8e1ecb210d4",
            &["wifi", "beach", "restaurant"],
        ),
        hotel(
            "3",
            "Mountain View Resort",
            "Drakensberg",
            4.2,
            1800,
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b",
            &["wifi", "hiking", "fireplace"],
        ),
        hotel(
            "4",
            "City Center Hotel",
            "Johannesburg",
            4.0,
            1200,
            "https://images.unsplash.com/photo-1551882547-ff40c63fe5fa",
            &["wifi", "gym", "business"],
        ),
        hotel(
            "5",
            "Safari Wilderness Lodge",
            "Kruger National Park",
            4.9,
            3500,
            "https://images.unsplash.com/photo-1544551763-46a013bb70d5",
            &["pool", "safari", "spa"],
        ),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(hotels: &[Hotel]) -> Vec<&str> {
        hotels.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let found = search_hotels(&sample_hotels(), "", SortOption::Rating);
        assert_eq!(ids(&found), vec!["5", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let found = search_hotels(&sample_hotels(), "", SortOption::Price);
        assert_eq!(ids(&found), vec!["4", "2", "3", "1", "5"]);
    }

    #[test]
    fn test_sort_by_name() {
        let found = search_hotels(&sample_hotels(), "", SortOption::Name);
        let names: Vec<&str> = found.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "City Center Hotel",
                "Mountain View Resort",
                "Safari Wilderness Lodge",
                "Sunset Lodge",
                "The Royal Hotel"
            ]
        );
    }

    #[test]
    fn test_search_matches_name_or_location() {
        let hotels = sample_hotels();
        assert_eq!(ids(&search_hotels(&hotels, "LODGE", SortOption::Rating)), vec!["5", "2"]);
        assert_eq!(ids(&search_hotels(&hotels, "cape", SortOption::Rating)), vec!["1"]);
        assert!(search_hotels(&hotels, "paris", SortOption::Rating).is_empty());
        assert_eq!(search_hotels(&hotels, "   ", SortOption::Rating).len(), 5);
    }

    #[test]
    fn test_results_label() {
        assert_eq!(results_label(0), "0 Hotels Found");
        assert_eq!(results_label(1), "1 Hotel Found");
        assert_eq!(results_label(5), "5 Hotels Found");
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!("Price".parse::<SortOption>().unwrap(), SortOption::Price);
        assert_eq!(SortOption::default(), SortOption::Rating);
        assert!("distance".parse::<SortOption>().is_err());
    }

    #[test]
    fn test_find_hotel() {
        let hotels = sample_hotels();
        assert_eq!(find_hotel(&hotels, "1").unwrap().price_per_night(), Money::from_major(2200));
        assert!(matches!(find_hotel(&hotels, "99"), Err(CoreError::HotelNotFound(_))));
    }
}
