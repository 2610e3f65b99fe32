//! Query-string parsing for the listing and booking screens
//!
//! Multi-select filters arrive either as repeated keys
//! (`category=Hotel&category=Resort`) or as comma lists (`category=Hotel,Resort`).
//! Both forms are accepted and may be mixed.

use luxe_core::Category;
use luxe_query::{HotelSort, SearchFilters};
use url::form_urlencoded;

/// Raw listing parameters as the user typed them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingParams {
    pub location: String,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub categories: Vec<String>,
    pub amenities: Vec<String>,
    pub rating: Option<f32>,
    pub sort: Option<String>,
}

fn push_list(target: &mut Vec<String>, value: &str) {
    for item in value.split(',').map(str::trim).filter(|v| !v.is_empty()) {
        if !target.iter().any(|t| t == item) {
            target.push(item.to_string());
        }
    }
}

fn number<T: std::str::FromStr>(value: &str) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}

impl ListingParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(raw) = raw else {
            return params;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "location" | "q" => params.location = value.trim().to_string(),
                "min_price" => params.min_price = number(&value),
                "max_price" => params.max_price = number(&value),
                "category" | "categories" => push_list(&mut params.categories, &value),
                "amenity" | "amenities" => push_list(&mut params.amenities, &value),
                "rating" => params.rating = number(&value),
                "sort" => {
                    let value = value.trim();
                    params.sort = (!value.is_empty()).then(|| value.to_string());
                }
                _ => {}
            }
        }
        params
    }

    /// Build validated filters. A lone price bound is completed with 0 or
    /// `u32::MAX`; a rating floor of 0 means "any".
    pub fn filters(&self) -> luxe_query::Result<SearchFilters> {
        let mut filters = SearchFilters::new().location(self.location.as_str());

        if self.min_price.is_some() || self.max_price.is_some() {
            filters = filters.price_range(
                self.min_price.unwrap_or(0),
                self.max_price.unwrap_or(u32::MAX),
            )?;
        }

        for category in &self.categories {
            filters = filters.category(category.parse::<Category>()?);
        }

        filters = filters.amenities(self.amenities.iter().cloned());

        if let Some(rating) = self.rating.filter(|r| *r > 0.0) {
            filters = filters.min_rating(rating)?;
        }

        Ok(filters)
    }

    pub fn sort(&self) -> luxe_query::Result<HotelSort> {
        match &self.sort {
            Some(sort) => sort.parse(),
            None => Ok(HotelSort::default()),
        }
    }

    pub fn has_category(&self, category: Category) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category.as_str()))
    }

    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }
}

/// `hotelId`, `room` and `extras` of the booking entry link
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingParams {
    pub hotel_id: Option<String>,
    pub room: Option<String>,
    pub extras: Vec<String>,
}

impl BookingParams {
    pub fn parse(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(raw) = raw else {
            return params;
        };

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "hotelId" | "hotel_id" => params.hotel_id = Some(value.trim().to_string()),
                "room" => params.room = Some(value.into_owned()),
                "extras" | "extra" => push_list(&mut params.extras, &value),
                _ => {}
            }
        }
        params
    }
}

/// Split a comma list carried in a hidden form field
pub fn split_list(value: &str) -> Vec<String> {
    let mut out = Vec::new();
    push_list(&mut out, value);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_and_comma_keys() {
        let params = ListingParams::parse(Some(
            "category=Hotel&category=Resort,Apartment&amenity=Pool%2CSpa&amenity=Pool",
        ));
        assert_eq!(params.categories, vec!["Hotel", "Resort", "Apartment"]);
        assert_eq!(params.amenities, vec!["Pool", "Spa"]);
    }

    #[test]
    fn test_numbers_and_blanks() {
        let params = ListingParams::parse(Some("min_price=&max_price=400&rating=4.5&sort=&location=+Paris+"));
        assert_eq!(params.min_price, None);
        assert_eq!(params.max_price, Some(400));
        assert_eq!(params.rating, Some(4.5));
        assert_eq!(params.sort, None);
        assert_eq!(params.location, "Paris");
    }

    #[test]
    fn test_filters_from_params() {
        let params = ListingParams::parse(Some("max_price=400&category=hotel"));
        let filters = params.filters().unwrap();
        assert_eq!(filters.price().map(|p| (p.min(), p.max())), Some((0, 400)));
        assert_eq!(filters.selected_categories(), &[Category::Hotel]);
    }

    #[test]
    fn test_invalid_filters_surface_errors() {
        assert!(ListingParams::parse(Some("min_price=500&max_price=100")).filters().is_err());
        assert!(ListingParams::parse(Some("category=Castle")).filters().is_err());
        assert!(ListingParams::parse(Some("rating=9")).filters().is_err());
        assert!(ListingParams::parse(Some("sort=random")).sort().is_err());
    }

    #[test]
    fn test_zero_rating_is_any() {
        let filters = ListingParams::parse(Some("rating=0")).filters().unwrap();
        assert!(filters.rating_floor().is_none());
    }

    #[test]
    fn test_booking_params() {
        let params = BookingParams::parse(Some("hotelId=1&room=Executive+Suite&extras=e1,e3"));
        assert_eq!(params.hotel_id.as_deref(), Some("1"));
        assert_eq!(params.room.as_deref(), Some("Executive Suite"));
        assert_eq!(params.extras, vec!["e1", "e3"]);
        assert_eq!(BookingParams::parse(None), BookingParams::default());
    }
}
