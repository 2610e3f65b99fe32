//! # Luxe Core
//!
//! Domain records shared by every Luxe Stay crate.
//!
//! ```text
//!  Destination ──hotelIds──┐        ┌──hotelIds── Deal
//!                          ▼        ▼
//!                        ┌────────────┐
//!           Room ──────▶ │   Hotel    │ ◀────── Review
//!                        └────────────┘
//!                              ▲
//!                   Booking ───┘ (denormalized display fields)
//! ```
//!
//! Every relationship is an id lookup. Nothing here enforces referential
//! integrity: a dangling hotel id simply joins to nothing.

pub mod amenity;
pub mod booking;
pub mod deal;
pub mod destination;
pub mod hotel;
pub mod review;
pub mod user;

pub use amenity::Amenity;
pub use booking::{Booking, BookingStatus, ExtraFacility};
pub use deal::{Deal, DealType, TimeLeft};
pub use destination::Destination;
pub use hotel::{Category, Coordinates, Hotel, Policies, Room};
pub use review::Review;
pub use user::User;

/// Result type for luxe-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing or validating domain records
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid {entity} '{id}': {reason}")]
    InvalidRecord {
        entity: &'static str,
        id: String,
        reason: String,
    },

    #[error("Unknown hotel category: {0}")]
    UnknownCategory(String),

    #[error("Unknown deal type: {0}")]
    UnknownDealType(String),

    #[error("Unknown booking status: {0}")]
    UnknownBookingStatus(String),
}

impl Error {
    pub(crate) fn invalid(entity: &'static str, id: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRecord {
            entity,
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
