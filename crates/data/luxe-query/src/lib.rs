//! # Luxe Query
//!
//! Pure, read-only queries over the fixture store.
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────────────────┐
//! │ web / cli    │────▶│ Catalog                       │
//! └──────────────┘     │  hotels   search, sort, rooms │
//!                      │  reviews  stats, filter       │────▶ FixtureStore
//!                      │  deals    active, tabs        │      (Arc, shared)
//!                      │  places   search, region      │
//!                      └───────────────────────────────┘
//! ```
//!
//! Nothing here mutates. Lookups that miss return `None` or an empty list.
//! Time-dependent deal queries take an explicit `now`; the wall-clock
//! variants just pass `Utc::now()`.

pub mod deals;
pub mod destinations;
pub mod filters;
pub mod hotels;
pub mod reviews;

pub use deals::DealsTab;
pub use destinations::ALL_REGIONS;
pub use filters::{HotelSort, PriceRange, SearchFilters};
pub use reviews::{ReviewFilter, ReviewSort, ReviewStats};

use luxe_core::{Amenity, Booking, ExtraFacility};
use luxe_fixtures::FixtureStore;
use std::sync::Arc;

/// Result type for luxe-query operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from building query parameters. Queries themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: u32, max: u32 },

    #[error("Rating floor {0} outside [0, 5]")]
    InvalidRating(f32),

    #[error("Unknown sort order: {0}")]
    UnknownSort(String),

    #[error("Unknown review sort: {0}")]
    UnknownReviewSort(String),

    #[error("Unknown deals tab: {0}")]
    UnknownTab(String),

    #[error(transparent)]
    Core(#[from] luxe_core::Error),
}

/// Query facade over a shared fixture store
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Arc<FixtureStore>,
}

impl Catalog {
    pub fn new(store: Arc<FixtureStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    pub fn amenities(&self) -> &[Amenity] {
        self.store.amenities()
    }

    pub fn amenity(&self, id: &str) -> Option<&Amenity> {
        self.store.amenities().iter().find(|a| a.id == id)
    }

    pub fn amenities_by_category(&self, category: &str) -> Vec<&Amenity> {
        self.store
            .amenities()
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    pub fn extras(&self) -> &[ExtraFacility] {
        self.store.extras()
    }

    pub fn extra(&self, id: &str) -> Option<&ExtraFacility> {
        self.store.extras().iter().find(|e| e.id == id)
    }

    /// Extras named by `ids`, in catalog order. Unknown ids are skipped.
    pub fn extras_for<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&ExtraFacility> {
        self.store
            .extras()
            .iter()
            .filter(|e| ids.iter().any(|id| id.as_ref() == e.id))
            .collect()
    }

    /// Sample trips shipped with the fixtures
    pub fn sample_trips(&self) -> &[Booking] {
        self.store.trips()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn catalog() -> Catalog {
        Catalog::new(Arc::new(FixtureStore::embedded().unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::catalog;

    #[test]
    fn test_extras_for_ignores_unknown() {
        let catalog = catalog();
        let picked = catalog.extras_for(&["e3", "nope", "e1"]);
        let ids: Vec<&str> = picked.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e3"]);
    }

    #[test]
    fn test_amenity_lookups() {
        let catalog = catalog();
        assert_eq!(catalog.amenity("a1").map(|a| a.name.as_str()), Some("WiFi"));
        assert!(catalog.amenity("zz").is_none());

        let wellness = catalog.amenities_by_category("wellness");
        assert!(wellness.iter().all(|a| a.category == "wellness"));
        assert_eq!(wellness.len(), 2);
    }
}
