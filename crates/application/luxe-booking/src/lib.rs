//! # Luxe Booking
//!
//! Everything between "Reserve" on a hotel page and the confirmation screen.
//!
//! ```text
//! Catalog + BookingConfig ──▶ BookingDraft ──▶ BookingWizard ──submit──▶ Booking
//!                               (quote)          (steps)       (id, delay)
//! ```
//!
//! No payment provider is involved. Submission sleeps for a configured delay
//! and fabricates an identifier through a [`BookingIdGenerator`].

pub mod draft;
pub mod ids;
pub mod pricing;
pub mod wizard;

pub use draft::BookingDraft;
pub use ids::{BookingIdGenerator, SequentialBookingIds, UuidBookingIds};
pub use pricing::{apply_discount, calculate_nights, calculate_total_price, PriceQuote, PricingPolicy};
pub use wizard::{BookingStep, BookingWizard, GuestDetails, SubmitOutcome};

/// Result type for luxe-booking operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Hotel not found: {0}")]
    HotelNotFound(String),

    #[error("Cannot '{action}' from the {from} step")]
    IllegalTransition {
        from: BookingStep,
        action: &'static str,
    },

    #[error("A booking cannot be resumed at the {0} step")]
    CannotResume(BookingStep),

    #[error("Unknown booking step: {0}")]
    UnknownStep(String),

    #[error("Stay dates fall outside the calendar: {lead_days} days out, {nights} nights")]
    DatesOutOfRange { lead_days: u32, nights: u32 },
}
