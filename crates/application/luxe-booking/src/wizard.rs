//! The four-step booking flow
//!
//! ```text
//!  Review ⇄ GuestDetails ⇄ Payment ──submit(user)──▶ Confirmed
//!                             │
//!                             └──submit(None)──▶ LoginRequired (stays at Payment)
//! ```

use chrono::NaiveDate;
use luxe_core::{Booking, User};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::draft::BookingDraft;
use crate::ids::BookingIdGenerator;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStep {
    Review,
    GuestDetails,
    Payment,
    Confirmed,
}

impl BookingStep {
    pub const ALL: [BookingStep; 4] = [
        BookingStep::Review,
        BookingStep::GuestDetails,
        BookingStep::Payment,
        BookingStep::Confirmed,
    ];

    /// 1-based position shown in the progress bar
    pub fn index(&self) -> u8 {
        match self {
            BookingStep::Review => 1,
            BookingStep::GuestDetails => 2,
            BookingStep::Payment => 3,
            BookingStep::Confirmed => 4,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        BookingStep::ALL.into_iter().find(|s| s.index() == index)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStep::Review => "review",
            BookingStep::GuestDetails => "guest-details",
            BookingStep::Payment => "payment",
            BookingStep::Confirmed => "confirmed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::Review => "Review",
            BookingStep::GuestDetails => "Guest Details",
            BookingStep::Payment => "Payment",
            BookingStep::Confirmed => "Confirmed",
        }
    }

    /// Step reached by "next", if the move is allowed
    pub fn next(&self) -> Option<Self> {
        match self {
            BookingStep::Review => Some(BookingStep::GuestDetails),
            BookingStep::GuestDetails => Some(BookingStep::Payment),
            BookingStep::Payment | BookingStep::Confirmed => None,
        }
    }

    /// Step reached by "back", if the move is allowed
    pub fn previous(&self) -> Option<Self> {
        match self {
            BookingStep::GuestDetails => Some(BookingStep::Review),
            BookingStep::Payment => Some(BookingStep::GuestDetails),
            BookingStep::Review | BookingStep::Confirmed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStep::Confirmed)
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStep {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return BookingStep::from_index(index).ok_or_else(|| Error::UnknownStep(s.to_string()));
        }
        let normalized = s.to_ascii_lowercase().replace('_', "-");
        BookingStep::ALL
            .into_iter()
            .find(|step| step.as_str() == normalized)
            .ok_or_else(|| Error::UnknownStep(s.to_string()))
    }
}

/// Contact and payment fields collected in steps 2 and 3. Mock only: card
/// details are never stored beyond the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub special_requests: String,
}

impl GuestDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Result of submitting from the payment step
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Confirmed(Booking),
    /// Nobody is logged in. The wizard did not move.
    LoginRequired,
}

#[derive(Debug, Clone)]
pub struct BookingWizard {
    draft: BookingDraft,
    step: BookingStep,
    guest: GuestDetails,
    confirmation: Option<Booking>,
}

impl BookingWizard {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            draft,
            step: BookingStep::Review,
            guest: GuestDetails::default(),
            confirmation: None,
        }
    }

    /// Rebuild a wizard at a step carried by the client. Confirmed cannot be
    /// resumed: it only exists as the result of a submission.
    pub fn resume(draft: BookingDraft, step: BookingStep, guest: GuestDetails) -> Result<Self> {
        if step.is_terminal() {
            return Err(Error::CannotResume(step));
        }
        Ok(Self {
            draft,
            step,
            guest,
            confirmation: None,
        })
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn guest(&self) -> &GuestDetails {
        &self.guest
    }

    pub fn set_guest(&mut self, guest: GuestDetails) {
        self.guest = guest;
    }

    pub fn confirmation(&self) -> Option<&Booking> {
        self.confirmation.as_ref()
    }

    pub fn advance(&mut self) -> Result<BookingStep> {
        let next = self.step.next().ok_or_else(|| self.refuse("next"))?;
        debug!(from = %self.step, to = %next, "Booking step forward");
        self.step = next;
        Ok(next)
    }

    pub fn go_back(&mut self) -> Result<BookingStep> {
        let previous = self.step.previous().ok_or_else(|| self.refuse("back"))?;
        debug!(from = %self.step, to = %previous, "Booking step back");
        self.step = previous;
        Ok(previous)
    }

    /// Pay. Requires a user; otherwise returns `LoginRequired` and stays put.
    /// With a user, waits `delay`, issues an id and moves to Confirmed.
    pub async fn submit(
        &mut self,
        user: Option<&User>,
        ids: &dyn BookingIdGenerator,
        delay: Duration,
        today: NaiveDate,
    ) -> Result<SubmitOutcome> {
        if self.step != BookingStep::Payment {
            return Err(self.refuse("pay"));
        }

        let Some(user) = user else {
            info!(hotel = %self.draft.hotel().id, "Payment attempted while logged out");
            return Ok(SubmitOutcome::LoginRequired);
        };

        tokio::time::sleep(delay).await;

        let booking = self.draft.to_booking(ids.next_id(), today);
        info!(
            booking_id = %booking.id,
            email = %user.email,
            hotel = %booking.hotel_name,
            total = booking.total_price,
            "Booking confirmed"
        );
        self.step = BookingStep::Confirmed;
        self.confirmation = Some(booking.clone());
        Ok(SubmitOutcome::Confirmed(booking))
    }

    fn refuse(&self, action: &'static str) -> Error {
        warn!(step = %self.step, action, "Refused booking transition");
        Error::IllegalTransition {
            from: self.step,
            action,
        }
    }
}
