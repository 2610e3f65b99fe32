//! Booking identifier strategies

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

pub const ID_PREFIX: &str = "BK-";

/// Produces the identifier of each confirmed booking
pub trait BookingIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `BK-` followed by a random UUIDv4
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidBookingIds;

impl BookingIdGenerator for UuidBookingIds {
    fn next_id(&self) -> String {
        format!("{}{}", ID_PREFIX, Uuid::new_v4().simple().to_string().to_uppercase())
    }
}

/// `BK-000001`, `BK-000002`, ... for reproducible output
#[derive(Debug, Default)]
pub struct SequentialBookingIds {
    issued: AtomicU64,
}

impl SequentialBookingIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after `issued` identifiers
    pub fn starting_after(issued: u64) -> Self {
        Self {
            issued: AtomicU64::new(issued),
        }
    }
}

impl BookingIdGenerator for SequentialBookingIds {
    fn next_id(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{:06}", ID_PREFIX, n)
    }
}
