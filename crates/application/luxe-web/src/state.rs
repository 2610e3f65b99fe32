//! Shared application state for the web surface

use luxe_booking::{BookingIdGenerator, UuidBookingIds};
use luxe_config::LuxeConfig;
use luxe_core::Booking;
use luxe_fixtures::FixtureStore;
use luxe_query::Catalog;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

/// Bookings kept per user; the oldest are dropped past this
pub const MAX_TRIPS_PER_USER: usize = 50;

/// Everything a handler can reach
pub struct AppState {
    pub catalog: Catalog,
    pub config: LuxeConfig,
    pub ids: Arc<dyn BookingIdGenerator>,
    /// Bookings made in this process, keyed by user email. Entries live until
    /// logout or process exit, at most [`MAX_TRIPS_PER_USER`] each.
    trips: RwLock<HashMap<String, Vec<Booking>>>,
    started_at: Instant,
}

impl AppState {
    /// Load fixtures named by `config` and issue UUID booking ids.
    pub fn new(config: LuxeConfig) -> crate::Result<Self> {
        let store = FixtureStore::load(config.data.fixtures_dir.as_deref())?;
        Ok(Self::with_parts(
            Catalog::new(Arc::new(store)),
            config,
            Arc::new(UuidBookingIds),
        ))
    }

    pub fn with_parts(catalog: Catalog, config: LuxeConfig, ids: Arc<dyn BookingIdGenerator>) -> Self {
        Self {
            catalog,
            config,
            ids,
            trips: RwLock::new(HashMap::new()),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn record_trip(&self, email: &str, booking: Booking) {
        let mut trips = self.trips.write().unwrap_or_else(|e| e.into_inner());
        let own = trips.entry(email.to_string()).or_default();
        own.push(booking);
        if own.len() > MAX_TRIPS_PER_USER {
            let excess = own.len() - MAX_TRIPS_PER_USER;
            own.drain(..excess);
        }
    }

    /// This session's bookings, newest first, followed by the sample trips
    pub fn trips_for(&self, email: &str) -> Vec<Booking> {
        let trips = self.trips.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<Booking> = trips
            .get(email)
            .map(|own| own.iter().rev().cloned().collect())
            .unwrap_or_default();
        all.extend(self.catalog.sample_trips().iter().cloned());
        all
    }

    pub fn forget_trips(&self, email: &str) {
        let mut trips = self.trips.write().unwrap_or_else(|e| e.into_inner());
        trips.remove(email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use luxe_booking::SequentialBookingIds;
    use luxe_core::BookingStatus;

    fn state() -> AppState {
        AppState::with_parts(
            Catalog::new(Arc::new(FixtureStore::embedded().unwrap())),
            LuxeConfig::default(),
            Arc::new(SequentialBookingIds::new()),
        )
    }

    fn booking(id: &str) -> Booking {
        let day = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        Booking {
            id: id.into(),
            hotel_id: "1".into(),
            hotel_name: "The Grand Regal".into(),
            hotel_image: String::new(),
            check_in: day,
            check_out: day,
            guests: 2,
            total_price: 2420,
            status: BookingStatus::Upcoming,
            created_at: day,
            room_type: None,
            extras: vec![],
        }
    }

    #[test]
    fn test_trips_scoped_by_email() {
        let state = state();
        state.record_trip("a@example.com", booking("BK-1"));
        state.record_trip("a@example.com", booking("BK-2"));

        let mine: Vec<String> = state.trips_for("a@example.com").into_iter().map(|b| b.id).collect();
        assert_eq!(mine, vec!["BK-2", "BK-1", "b1", "b2"]);

        let theirs = state.trips_for("b@example.com");
        assert_eq!(theirs.len(), 2);
    }

    #[test]
    fn test_trips_capped_per_user() {
        let state = state();
        for n in 0..MAX_TRIPS_PER_USER + 3 {
            state.record_trip("a@example.com", booking(&format!("BK-{}", n)));
        }

        let trips = state.trips_for("a@example.com");
        assert_eq!(trips.len(), MAX_TRIPS_PER_USER + 2);
        assert_eq!(trips[0].id, format!("BK-{}", MAX_TRIPS_PER_USER + 2));
        assert_eq!(trips[MAX_TRIPS_PER_USER - 1].id, "BK-3");
    }

    #[test]
    fn test_forget_trips() {
        let state = state();
        state.record_trip("a@example.com", booking("BK-1"));
        state.forget_trips("a@example.com");
        assert_eq!(state.trips_for("a@example.com").len(), 2);
    }
}
