//! What is being booked, before any guest input

use chrono::{Days, NaiveDate};
use luxe_config::BookingConfig;
use luxe_core::{Booking, BookingStatus, ExtraFacility, Hotel};
use luxe_query::Catalog;

use crate::pricing::{PriceQuote, PricingPolicy};
use crate::{Error, Result};

/// Hotel, room, extras and dates for one booking attempt
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    hotel: Hotel,
    room: String,
    extras: Vec<ExtraFacility>,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    quote: PriceQuote,
}

impl BookingDraft {
    /// Resolve a draft from request parameters. Unknown extra ids are dropped;
    /// a missing or blank room falls back to the configured default.
    pub fn new<S: AsRef<str>>(
        catalog: &Catalog,
        config: &BookingConfig,
        hotel_id: &str,
        room: Option<&str>,
        extra_ids: &[S],
        today: NaiveDate,
    ) -> Result<Self> {
        let hotel = catalog
            .hotel(hotel_id)
            .ok_or_else(|| Error::HotelNotFound(hotel_id.to_string()))?
            .clone();

        let room = room
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&config.default_room)
            .to_string();

        let extras: Vec<ExtraFacility> = catalog.extras_for(extra_ids).into_iter().cloned().collect();

        let out_of_range = || Error::DatesOutOfRange {
            lead_days: config.lead_days,
            nights: config.nights,
        };
        let check_in = today
            .checked_add_days(Days::new(u64::from(config.lead_days)))
            .ok_or_else(out_of_range)?;
        let check_out = check_in
            .checked_add_days(Days::new(u64::from(config.nights)))
            .ok_or_else(out_of_range)?;

        let quote = PricingPolicy::from(config).quote(hotel.price, &extras);

        Ok(Self {
            hotel,
            room,
            extras,
            check_in,
            check_out,
            guests: config.default_guests,
            quote,
        })
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn extras(&self) -> &[ExtraFacility] {
        &self.extras
    }

    pub fn extra_ids(&self) -> Vec<&str> {
        self.extras.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    pub fn total(&self) -> u32 {
        self.quote.total
    }

    /// The booking record this draft becomes once paid for
    pub fn to_booking(&self, id: String, created: NaiveDate) -> Booking {
        Booking {
            id,
            hotel_id: self.hotel.id.clone(),
            hotel_name: self.hotel.name.clone(),
            hotel_image: self.hotel.image.clone(),
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
            total_price: self.quote.total,
            status: BookingStatus::Upcoming,
            created_at: created,
            room_type: Some(self.room.clone()),
            extras: self.extras.iter().map(|e| e.name.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxe_fixtures::FixtureStore;
    use std::sync::Arc;

    fn catalog() -> Catalog {
        Catalog::new(Arc::new(FixtureStore::embedded().unwrap()))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn test_defaults() {
        let draft = BookingDraft::new(
            &catalog(),
            &BookingConfig::default(),
            "1",
            None,
            &[] as &[&str],
            today(),
        )
        .unwrap();

        assert_eq!(draft.room(), "Deluxe King Room");
        assert_eq!(draft.guests(), 2);
        assert_eq!(draft.check_in(), NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        assert_eq!(draft.check_out(), NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(draft.total(), 2420);
    }

    #[test]
    fn test_extras_priced_and_unknown_dropped() {
        let draft = BookingDraft::new(
            &catalog(),
            &BookingConfig::default(),
            "1",
            Some("Executive Suite"),
            &["e1", "bogus", "e3"],
            today(),
        )
        .unwrap();

        assert_eq!(draft.extra_ids(), vec!["e1", "e3"]);
        assert_eq!(draft.total(), 2420 + 45 + 15);
        assert_eq!(draft.room(), "Executive Suite");
    }

    #[test]
    fn test_unknown_hotel() {
        let result = BookingDraft::new(
            &catalog(),
            &BookingConfig::default(),
            "404",
            None,
            &[] as &[&str],
            today(),
        );
        assert!(matches!(result, Err(Error::HotelNotFound(id)) if id == "404"));
    }

    #[test]
    fn test_lead_days_past_calendar_end() {
        let config = BookingConfig {
            lead_days: u32::MAX,
            ..BookingConfig::default()
        };
        let result = BookingDraft::new(&catalog(), &config, "1", None, &[] as &[&str], today());
        assert!(matches!(
            result,
            Err(Error::DatesOutOfRange { lead_days: u32::MAX, nights: 5 })
        ));
    }

    #[test]
    fn test_to_booking() {
        let draft = BookingDraft::new(
            &catalog(),
            &BookingConfig::default(),
            "5",
            Some("  "),
            &["e2"],
            today(),
        )
        .unwrap();

        let booking = draft.to_booking("BK-1".into(), today());
        assert_eq!(booking.hotel_name, "Sunrise Sands Hotel");
        assert_eq!(booking.total_price, 400 * 5 + 170 + 120);
        assert_eq!(booking.status, BookingStatus::Upcoming);
        assert_eq!(booking.nights(), 5);
        assert_eq!(booking.room_type.as_deref(), Some("Deluxe King Room"));
        assert_eq!(booking.extras, vec!["Spa Access".to_string()]);
    }
}
