// file: src/model/booking.rs
// version: 1.0.0
// guid: 7e19c4d6-2a85-4f30-9b17-c3f608a5d2e4

//! Booking record structure

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reservation against a listing for a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Unique booking identifier
    pub booking_id: Uuid,
    /// Listing this booking reserves
    pub listing_id: Uuid,
    /// User identifier (email address)
    pub user: String,
    /// First night of the stay (inclusive)
    pub start_date: NaiveDate,
    /// Checkout date (exclusive)
    pub end_date: NaiveDate,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a new booking with a generated identifier
    pub fn new(
        listing_id: Uuid,
        user: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            booking_id: Uuid::new_v4(),
            listing_id,
            user: user.into(),
            start_date,
            end_date,
            created_at: Utc::now(),
        }
    }

    /// Build the hardcoded sample booking used by the diagnostic command:
    /// a 3-day stay starting 5 days after the given date, booked by the
    /// placeholder test user.
    pub fn fixture(listing_id: Uuid, today: NaiveDate) -> Self {
        Self::new(
            listing_id,
            "test@example.com",
            today + Duration::days(5),
            today + Duration::days(8),
        )
    }

    /// Length of the stay in nights
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Validate the booking record
    pub fn validate(&self) -> crate::Result<()> {
        if self.user.is_empty() {
            return Err(crate::error::AgentError::validation(
                "Booking user cannot be empty".to_string(),
            ));
        }

        if self.end_date <= self.start_date {
            return Err(crate::error::AgentError::validation(format!(
                "Stay window ends before it starts: {} >= {}",
                self.start_date, self.end_date
            )));
        }

        Ok(())
    }
}
