//! # Luxe Fixtures
//!
//! The static seed data every screen and command reads from.
//!
//! ```text
//! fixtures/*.json ──include_str!──▶ embedded copies
//!                                        │
//!  --fixtures-dir/*.json ──(per file)────┤ override when present
//!                                        ▼
//!                              validate ──▶ FixtureStore (read-only)
//! ```
//!
//! The store is built once at startup and never mutated afterwards.

use luxe_core::{Amenity, Booking, Deal, Destination, ExtraFacility, Hotel, Review, Room};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result type for luxe-fixtures operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed fixture {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] luxe_core::Error),

    #[error("Duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },
}

/// A fixture file name paired with the copy compiled into the binary
struct Fixture {
    file: &'static str,
    embedded: &'static str,
}

const HOTELS: Fixture = Fixture {
    file: "hotels.json",
    embedded: include_str!("../fixtures/hotels.json"),
};
const ROOMS: Fixture = Fixture {
    file: "rooms.json",
    embedded: include_str!("../fixtures/rooms.json"),
};
const REVIEWS: Fixture = Fixture {
    file: "reviews.json",
    embedded: include_str!("../fixtures/reviews.json"),
};
const DESTINATIONS: Fixture = Fixture {
    file: "destinations.json",
    embedded: include_str!("../fixtures/destinations.json"),
};
const DEALS: Fixture = Fixture {
    file: "deals.json",
    embedded: include_str!("../fixtures/deals.json"),
};
const AMENITIES: Fixture = Fixture {
    file: "amenities.json",
    embedded: include_str!("../fixtures/amenities.json"),
};
const EXTRAS: Fixture = Fixture {
    file: "extras.json",
    embedded: include_str!("../fixtures/extras.json"),
};
const TRIPS: Fixture = Fixture {
    file: "bookings.json",
    embedded: include_str!("../fixtures/bookings.json"),
};

/// Names of every file a fixtures directory may provide
pub const FIXTURE_FILES: [&str; 8] = [
    HOTELS.file,
    ROOMS.file,
    REVIEWS.file,
    DESTINATIONS.file,
    DEALS.file,
    AMENITIES.file,
    EXTRAS.file,
    TRIPS.file,
];

/// Raw collections before validation. Tests build these by hand.
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    pub hotels: Vec<Hotel>,
    pub rooms: Vec<Room>,
    pub reviews: Vec<Review>,
    pub destinations: Vec<Destination>,
    pub deals: Vec<Deal>,
    pub amenities: Vec<Amenity>,
    pub extras: Vec<ExtraFacility>,
    /// Sample trips shown on every dashboard
    pub trips: Vec<Booking>,
}

/// Validated, read-only fixture collections
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    set: FixtureSet,
}

impl FixtureStore {
    /// Store built from the copies compiled into the binary
    pub fn embedded() -> Result<Self> {
        let set = read_set(|fixture| Ok((format!("embedded:{}", fixture.file), Cow::Borrowed(fixture.embedded))))?;
        let store = Self::from_set(set)?;
        store.log_loaded("embedded");
        Ok(store)
    }

    /// Store built from `dir`. Files missing from the directory fall back to
    /// the embedded copy, so a directory may override a single collection.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let set = read_set(|fixture| {
            let path = dir.join(fixture.file);
            if !path.exists() {
                debug!(file = fixture.file, dir = %dir.display(), "Fixture not in directory, using embedded copy");
                return Ok((format!("embedded:{}", fixture.file), Cow::Borrowed(fixture.embedded)));
            }
            let text = std::fs::read_to_string(&path).map_err(|source| Error::Read {
                path: path.clone(),
                source,
            })?;
            Ok((path.display().to_string(), Cow::Owned(text)))
        })?;
        let store = Self::from_set(set)?;
        store.log_loaded(&dir.display().to_string());
        Ok(store)
    }

    /// `load_dir` when a directory is configured, otherwise `embedded`.
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::load_dir(dir),
            None => Self::embedded(),
        }
    }

    /// Validate hand-assembled collections.
    pub fn from_set(set: FixtureSet) -> Result<Self> {
        for hotel in &set.hotels {
            hotel.validate()?;
        }
        for review in &set.reviews {
            review.validate()?;
        }
        for deal in &set.deals {
            deal.validate()?;
        }

        unique_ids("hotel", set.hotels.iter().map(|h| h.id.as_str()))?;
        unique_ids("room", set.rooms.iter().map(|r| r.id.as_str()))?;
        unique_ids("review", set.reviews.iter().map(|r| r.id.as_str()))?;
        unique_ids("destination", set.destinations.iter().map(|d| d.id.as_str()))?;
        unique_ids("destination slug", set.destinations.iter().map(|d| d.slug.as_str()))?;
        unique_ids("deal", set.deals.iter().map(|d| d.id.as_str()))?;
        unique_ids("amenity", set.amenities.iter().map(|a| a.id.as_str()))?;
        unique_ids("extra", set.extras.iter().map(|e| e.id.as_str()))?;
        unique_ids("trip", set.trips.iter().map(|b| b.id.as_str()))?;

        Ok(Self { set })
    }

    fn log_loaded(&self, source: &str) {
        info!(
            source,
            hotels = self.set.hotels.len(),
            rooms = self.set.rooms.len(),
            reviews = self.set.reviews.len(),
            destinations = self.set.destinations.len(),
            deals = self.set.deals.len(),
            "Fixture store loaded"
        );
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.set.hotels
    }

    pub fn rooms(&self) -> &[Room] {
        &self.set.rooms
    }

    pub fn reviews(&self) -> &[Review] {
        &self.set.reviews
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.set.destinations
    }

    pub fn deals(&self) -> &[Deal] {
        &self.set.deals
    }

    pub fn amenities(&self) -> &[Amenity] {
        &self.set.amenities
    }

    pub fn extras(&self) -> &[ExtraFacility] {
        &self.set.extras
    }

    pub fn trips(&self) -> &[Booking] {
        &self.set.trips
    }
}

fn read_set<F>(read: F) -> Result<FixtureSet>
where
    F: Fn(&Fixture) -> Result<(String, Cow<'static, str>)>,
{
    Ok(FixtureSet {
        hotels: parse(&read, &HOTELS)?,
        rooms: parse(&read, &ROOMS)?,
        reviews: parse(&read, &REVIEWS)?,
        destinations: parse(&read, &DESTINATIONS)?,
        deals: parse(&read, &DEALS)?,
        amenities: parse(&read, &AMENITIES)?,
        extras: parse(&read, &EXTRAS)?,
        trips: parse(&read, &TRIPS)?,
    })
}

fn parse<T, F>(read: &F, fixture: &Fixture) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&Fixture) -> Result<(String, Cow<'static, str>)>,
{
    let (origin, text) = read(fixture)?;
    serde_json::from_str(&text).map_err(|source| Error::Parse { origin, source })
}

fn unique_ids<'a>(entity: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::DuplicateId {
                entity,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_core::Category;

    #[test]
    fn test_embedded_store_loads() {
        let store = FixtureStore::embedded().unwrap();
        assert_eq!(store.hotels().len(), 6);
        assert_eq!(store.extras().len(), 3);
        assert_eq!(store.trips().len(), 2);
        assert!(!store.rooms().is_empty());
        assert!(!store.reviews().is_empty());
        assert!(!store.deals().is_empty());
        assert!(!store.amenities().is_empty());

        let regal = &store.hotels()[0];
        assert_eq!(regal.name, "The Grand Regal");
        assert_eq!(regal.price, 450);
        assert_eq!(regal.category, Category::Hotel);
    }

    #[test]
    fn test_embedded_extras_prices() {
        let store = FixtureStore::embedded().unwrap();
        let prices: Vec<(&str, u32)> = store
            .extras()
            .iter()
            .map(|e| (e.id.as_str(), e.price))
            .collect();
        assert_eq!(prices, vec![("e1", 45), ("e2", 120), ("e3", 15)]);
    }

    #[test]
    fn test_dir_overrides_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let hotels = FixtureStore::embedded().unwrap().hotels()[..2].to_vec();
        std::fs::write(
            dir.path().join("hotels.json"),
            serde_json::to_string(&hotels).unwrap(),
        )
        .unwrap();

        let store = FixtureStore::load(Some(dir.path())).unwrap();
        assert_eq!(store.hotels().len(), 2);
        assert_eq!(store.extras().len(), 3);
    }

    #[test]
    fn test_malformed_file_reports_origin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("deals.json"), "{ not json").unwrap();

        match FixtureStore::load_dir(dir.path()) {
            Err(Error::Parse { origin, .. }) => assert!(origin.ends_with("deals.json")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let mut set = FixtureSet {
            hotels: FixtureStore::embedded().unwrap().hotels().to_vec(),
            ..FixtureSet::default()
        };
        set.hotels[0].rating = 7.5;
        assert!(matches!(FixtureStore::from_set(set), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_duplicate_hotel_id_rejected() {
        let hotels = FixtureStore::embedded().unwrap().hotels().to_vec();
        let mut dup = hotels.clone();
        dup.push(hotels[0].clone());

        let set = FixtureSet {
            hotels: dup,
            ..FixtureSet::default()
        };
        assert!(matches!(
            FixtureStore::from_set(set),
            Err(Error::DuplicateId { entity: "hotel", .. })
        ));
    }
}
