//! Hotels and their rooms

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Highest rating a hotel or review can carry
pub const MAX_RATING: f32 = 5.0;

/// Property category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Hotel,
    Resort,
    Apartment,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Hotel, Category::Resort, Category::Apartment];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hotel => "Hotel",
            Category::Resort => "Resort",
            Category::Apartment => "Apartment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Policies {
    pub cancellation: String,
    pub pets: String,
    pub smoking: String,
}

/// A bookable property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    pub city: String,
    pub country: String,
    pub region: String,
    /// Nightly price in whole currency units
    pub price: u32,
    pub rating: f32,
    pub reviews_count: u32,
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub category: Category,
    pub description: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub check_in_time: String,
    #[serde(default)]
    pub check_out_time: String,
    #[serde(default)]
    pub policies: Policies,
    #[serde(default)]
    pub nearby_attractions: Vec<String>,
}

impl Hotel {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(Error::invalid(
                "hotel",
                &self.id,
                format!("rating {} outside [0, 5]", self.rating),
            ));
        }
        if self.id.trim().is_empty() {
            return Err(Error::invalid("hotel", &self.name, "empty id"));
        }
        Ok(())
    }

    /// Exact (case-sensitive) amenity membership, as the listing filters use it.
    pub fn has_amenity(&self, amenity: &str) -> bool {
        self.amenities.iter().any(|a| a == amenity)
    }

    /// First gallery image, falling back to the card image.
    pub fn hero_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(&self.image)
    }
}

/// A room type offered by one hotel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub hotel_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub price: u32,
    pub size: String,
    pub max_guests: u32,
    pub beds: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Hotel {
        Hotel {
            id: "1".into(),
            name: "The Grand Regal".into(),
            location: "Paris, France".into(),
            city: "Paris".into(),
            country: "France".into(),
            region: "Europe".into(),
            price: 450,
            rating: 4.9,
            reviews_count: 1240,
            image: "card.jpg".into(),
            images: vec![],
            amenities: vec!["WiFi".into(), "Pool".into()],
            category: Category::Hotel,
            description: String::new(),
            coordinates: Coordinates { lat: 48.8566, lng: 2.3522 },
            check_in_time: "15:00".into(),
            check_out_time: "11:00".into(),
            policies: Policies::default(),
            nearby_attractions: vec![],
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Resort".parse::<Category>().unwrap(), Category::Resort);
        assert_eq!("apartment".parse::<Category>().unwrap(), Category::Apartment);
        assert!("Hostel".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::Hotel).unwrap();
        assert_eq!(json, "\"Hotel\"");
    }

    #[test]
    fn test_rating_bounds() {
        let mut hotel = sample();
        assert!(hotel.validate().is_ok());

        hotel.rating = 5.0;
        assert!(hotel.validate().is_ok());

        hotel.rating = 5.1;
        assert!(hotel.validate().is_err());

        hotel.rating = -0.5;
        assert!(hotel.validate().is_err());
    }

    #[test]
    fn test_hero_image_fallback() {
        let mut hotel = sample();
        assert_eq!(hotel.hero_image(), "card.jpg");

        hotel.images = vec!["gallery-1.jpg".into()];
        assert_eq!(hotel.hero_image(), "gallery-1.jpg");
    }

    #[test]
    fn test_has_amenity_is_exact() {
        let hotel = sample();
        assert!(hotel.has_amenity("WiFi"));
        assert!(!hotel.has_amenity("wifi"));
        assert!(!hotel.has_amenity("Spa"));
    }
}
