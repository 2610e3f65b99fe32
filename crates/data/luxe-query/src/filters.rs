//! Hotel search filters and listing sort orders

use luxe_core::hotel::MAX_RATING;
use luxe_core::{Category, Hotel};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Inclusive nightly price bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub fn new(min: u32, max: u32) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Listing filters. Every unset option imposes no constraint; set options are ANDed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    location: Option<String>,
    price_range: Option<PriceRange>,
    categories: Vec<Category>,
    amenities: Vec<String>,
    min_rating: Option<f32>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring over name, location, city and country.
    /// Blank input clears the filter.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        let location = location.into();
        let trimmed = location.trim();
        self.location = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        };
        self
    }

    pub fn price_range(mut self, min: u32, max: u32) -> Result<Self> {
        self.price_range = Some(PriceRange::new(min, max)?);
        Ok(self)
    }

    pub fn category(mut self, category: Category) -> Self {
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
        self
    }

    pub fn categories(self, categories: impl IntoIterator<Item = Category>) -> Self {
        categories.into_iter().fold(self, |f, c| f.category(c))
    }

    pub fn amenity(mut self, amenity: impl Into<String>) -> Self {
        let amenity = amenity.into();
        if !amenity.is_empty() && !self.amenities.contains(&amenity) {
            self.amenities.push(amenity);
        }
        self
    }

    pub fn amenities<S: Into<String>>(self, amenities: impl IntoIterator<Item = S>) -> Self {
        amenities.into_iter().fold(self, |f, a| f.amenity(a))
    }

    pub fn min_rating(mut self, floor: f32) -> Result<Self> {
        if !(0.0..=MAX_RATING).contains(&floor) {
            return Err(Error::InvalidRating(floor));
        }
        self.min_rating = Some(floor);
        Ok(self)
    }

    pub fn location_term(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn price(&self) -> Option<PriceRange> {
        self.price_range
    }

    pub fn selected_categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn selected_amenities(&self) -> &[String] {
        &self.amenities
    }

    pub fn rating_floor(&self) -> Option<f32> {
        self.min_rating
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, hotel: &Hotel) -> bool {
        if let Some(term) = &self.location {
            let hit = [&hotel.name, &hotel.location, &hotel.city, &hotel.country]
                .iter()
                .any(|field| field.to_lowercase().contains(term.as_str()));
            if !hit {
                return false;
            }
        }

        if let Some(range) = &self.price_range {
            if !range.contains(hotel.price) {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&hotel.category) {
            return false;
        }

        if !self.amenities.iter().all(|a| hotel.has_amenity(a)) {
            return false;
        }

        if let Some(floor) = self.min_rating {
            if hotel.rating < floor {
                return false;
            }
        }

        true
    }
}

/// Listing sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HotelSort {
    /// Fixture order
    #[default]
    Popularity,
    PriceLow,
    PriceHigh,
    Rating,
}

impl HotelSort {
    pub const ALL: [HotelSort; 4] = [
        HotelSort::Popularity,
        HotelSort::PriceLow,
        HotelSort::PriceHigh,
        HotelSort::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HotelSort::Popularity => "popularity",
            HotelSort::PriceLow => "price-low",
            HotelSort::PriceHigh => "price-high",
            HotelSort::Rating => "rating",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HotelSort::Popularity => "Most Popular",
            HotelSort::PriceLow => "Price: Low to High",
            HotelSort::PriceHigh => "Price: High to Low",
            HotelSort::Rating => "Top Rated",
        }
    }

    pub fn apply(&self, hotels: &mut [&Hotel]) {
        match self {
            HotelSort::Popularity => {}
            HotelSort::PriceLow => hotels.sort_by_key(|h| h.price),
            HotelSort::PriceHigh => hotels.sort_by(|a, b| b.price.cmp(&a.price)),
            HotelSort::Rating => hotels.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

impl fmt::Display for HotelSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotelSort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        HotelSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == normalized)
            .ok_or_else(|| Error::UnknownSort(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_rejects_inverted() {
        assert!(PriceRange::new(500, 100).is_err());
        let range = PriceRange::new(100, 100).unwrap();
        assert!(range.contains(100));
        assert!(!range.contains(101));
    }

    #[test]
    fn test_rating_floor_bounds() {
        assert!(SearchFilters::new().min_rating(5.0).is_ok());
        assert!(SearchFilters::new().min_rating(0.0).is_ok());
        assert!(SearchFilters::new().min_rating(5.5).is_err());
        assert!(SearchFilters::new().min_rating(-1.0).is_err());
    }

    #[test]
    fn test_blank_location_is_unset() {
        let filters = SearchFilters::new().location("   ");
        assert!(filters.location_term().is_none());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_duplicate_selections_collapse() {
        let filters = SearchFilters::new()
            .categories([Category::Hotel, Category::Hotel])
            .amenities(["Pool", "Pool", ""]);
        assert_eq!(filters.selected_categories(), &[Category::Hotel]);
        assert_eq!(filters.selected_amenities(), &["Pool".to_string()]);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!("price-low".parse::<HotelSort>().unwrap(), HotelSort::PriceLow);
        assert_eq!("PRICE_HIGH".parse::<HotelSort>().unwrap(), HotelSort::PriceHigh);
        assert!("cheapest".parse::<HotelSort>().is_err());
    }
}
