//! Hotel search, lookups and room options

use luxe_core::{Hotel, Room};
use tracing::debug;

use crate::filters::{HotelSort, SearchFilters};
use crate::Catalog;

/// Rooms offered when a hotel ships no room fixtures: (name, type, size, extra, multiplier)
const DERIVED_TIERS: [(&str, &str, &str, u32, u32); 3] = [
    ("Deluxe King Room", "deluxe", "45 sqm", 0, 1),
    ("Executive Suite", "suite", "75 sqm", 150, 1),
    ("Presidential Villa", "villa", "120 sqm", 0, 2),
];

impl Catalog {
    pub fn hotels(&self) -> &[Hotel] {
        self.store().hotels()
    }

    pub fn hotel(&self, id: &str) -> Option<&Hotel> {
        self.store().hotels().iter().find(|h| h.id == id)
    }

    /// Hotels passing every set filter, in fixture order.
    pub fn search_hotels(&self, filters: &SearchFilters) -> Vec<&Hotel> {
        let hits: Vec<&Hotel> = self
            .store()
            .hotels()
            .iter()
            .filter(|h| filters.matches(h))
            .collect();
        debug!(matched = hits.len(), "Hotel search");
        hits
    }

    /// `search_hotels` followed by `sort`.
    pub fn search_hotels_sorted(&self, filters: &SearchFilters, sort: HotelSort) -> Vec<&Hotel> {
        let mut hits = self.search_hotels(filters);
        sort.apply(&mut hits);
        hits
    }

    /// Top `limit` hotels by rating
    pub fn featured_hotels(&self, limit: usize) -> Vec<&Hotel> {
        let mut hotels: Vec<&Hotel> = self.store().hotels().iter().collect();
        HotelSort::Rating.apply(&mut hotels);
        hotels.truncate(limit);
        hotels
    }

    /// Hotels listed by a destination. Dangling ids join to nothing.
    pub fn hotels_by_destination(&self, destination_id: &str) -> Vec<&Hotel> {
        let Some(destination) = self.destination(destination_id) else {
            return Vec::new();
        };
        self.store()
            .hotels()
            .iter()
            .filter(|h| destination.hotel_ids.contains(&h.id))
            .collect()
    }

    pub fn rooms_for_hotel(&self, hotel_id: &str) -> Vec<&Room> {
        self.store()
            .rooms()
            .iter()
            .filter(|r| r.hotel_id == hotel_id)
            .collect()
    }

    pub fn room(&self, id: &str) -> Option<&Room> {
        self.store().rooms().iter().find(|r| r.id == id)
    }

    /// Rooms to offer on the detail page: the hotel's room fixtures, or three
    /// tiers derived from the nightly price when it has none.
    pub fn room_options(&self, hotel: &Hotel) -> Vec<Room> {
        let rooms = self.rooms_for_hotel(&hotel.id);
        if !rooms.is_empty() {
            return rooms.into_iter().cloned().collect();
        }

        DERIVED_TIERS
            .iter()
            .map(|&(name, room_type, size, extra, multiplier)| Room {
                id: format!("{}-{}", hotel.id, room_type),
                hotel_id: hotel.id.clone(),
                name: name.to_string(),
                room_type: room_type.to_string(),
                price: hotel.price * multiplier + extra,
                size: size.to_string(),
                max_guests: 2 * multiplier,
                beds: "1 King Bed".to_string(),
                image: hotel.image.clone(),
                amenities: Vec::new(),
                description: String::new(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::filters::{HotelSort, SearchFilters};
    use crate::test_support::catalog;
    use luxe_core::Category;

    fn names<'a>(hotels: &[&'a luxe_core::Hotel]) -> Vec<&'a str> {
        hotels.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_empty_filters_return_everything_in_order() {
        let catalog = catalog();
        let hits = catalog.search_hotels(&SearchFilters::new());
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_price_and_category_scenario() {
        let catalog = catalog();
        let filters = SearchFilters::new()
            .price_range(0, 400)
            .unwrap()
            .category(Category::Hotel);

        let hits = catalog.search_hotels(&filters);
        assert_eq!(names(&hits), vec!["Sunrise Sands Hotel"]);
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let catalog = catalog();
        let hits = catalog.search_hotels(&SearchFilters::new().price_range(320, 450).unwrap());
        let prices: Vec<u32> = hits.iter().map(|h| h.price).collect();
        assert_eq!(prices, vec![450, 320, 400]);
    }

    #[test]
    fn test_amenities_require_all() {
        let catalog = catalog();
        let hits = catalog.search_hotels(&SearchFilters::new().amenities(["Pool", "Spa"]));
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "6"]);

        let none = catalog.search_hotels(&SearchFilters::new().amenities(["Pool", "Fireplace"]));
        assert!(none.is_empty());
    }

    #[test]
    fn test_location_is_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.search_hotels(&SearchFilters::new().location("PARIS"));
        assert_eq!(names(&hits), vec!["The Grand Regal"]);

        let by_country = catalog.search_hotels(&SearchFilters::new().location("indonesia"));
        assert_eq!(names(&by_country), vec!["Eco Jungle Retreat"]);
    }

    #[test]
    fn test_rating_floor() {
        let catalog = catalog();
        let hits = catalog.search_hotels(&SearchFilters::new().min_rating(4.9).unwrap());
        let ids: Vec<&str> = hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
    }

    #[test]
    fn test_sorted_search() {
        let catalog = catalog();
        let cheap_first = catalog.search_hotels_sorted(&SearchFilters::new(), HotelSort::PriceLow);
        assert_eq!(cheap_first.first().map(|h| h.price), Some(250));
        assert_eq!(cheap_first.last().map(|h| h.price), Some(850));

        let dear_first = catalog.search_hotels_sorted(&SearchFilters::new(), HotelSort::PriceHigh);
        assert_eq!(dear_first.first().map(|h| h.price), Some(850));
    }

    #[test]
    fn test_featured_hotels_by_rating() {
        let catalog = catalog();
        let top = catalog.featured_hotels(3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "Azure Cove Resort");
        assert!(top.iter().all(|h| h.rating >= 4.9));
        assert_eq!(catalog.featured_hotels(100).len(), 6);
    }

    #[test]
    fn test_hotels_by_destination_skips_dangling_ids() {
        let catalog = catalog();
        let bali = catalog.hotels_by_destination("d6");
        assert_eq!(names(&bali), vec!["Eco Jungle Retreat"]);
        assert!(catalog.hotels_by_destination("missing").is_empty());
    }

    #[test]
    fn test_room_options_fallback_tiers() {
        let catalog = catalog();
        let jungle = catalog.hotel("6").unwrap();
        assert!(catalog.rooms_for_hotel("6").is_empty());

        let options = catalog.room_options(jungle);
        let priced: Vec<(&str, u32)> = options.iter().map(|r| (r.name.as_str(), r.price)).collect();
        assert_eq!(
            priced,
            vec![
                ("Deluxe King Room", 250),
                ("Executive Suite", 400),
                ("Presidential Villa", 500),
            ]
        );
    }

    #[test]
    fn test_room_options_prefer_fixtures() {
        let catalog = catalog();
        let regal = catalog.hotel("1").unwrap();
        let options = catalog.room_options(regal);
        assert!(options.iter().all(|r| r.hotel_id == "1"));
        assert_eq!(options.len(), catalog.rooms_for_hotel("1").len());
        assert!(catalog.room(&options[0].id).is_some());
    }

    #[test]
    fn test_unknown_hotel() {
        assert!(catalog().hotel("999").is_none());
    }
}
