// file: src/model/listing.rs
// version: 1.0.0
// guid: 5c07f3a2-9d48-4e16-85b3-0a62d7e4f9c8

//! Listing record structure

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rentable property with a nightly price and availability window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing identifier
    pub id: Uuid,
    /// Listing title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Nightly price
    pub price_per_night: f64,
    /// First available date (inclusive)
    pub available_from: NaiveDate,
    /// Last available date (inclusive)
    pub available_to: NaiveDate,
    /// Record creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Create a new listing with a generated identifier
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price_per_night: f64,
        available_from: NaiveDate,
        available_to: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            price_per_night,
            available_from,
            available_to,
            created_at: Utc::now(),
        }
    }

    /// Build the hardcoded sample listing used by the diagnostic command,
    /// available for 30 days starting on the given date.
    pub fn fixture(today: NaiveDate) -> Self {
        Self::new(
            "Test Vacation Home",
            "A beautiful vacation home for testing",
            200.00,
            today,
            today + Duration::days(30),
        )
    }

    /// Validate the listing record
    pub fn validate(&self) -> crate::Result<()> {
        if self.title.is_empty() {
            return Err(crate::error::AgentError::validation(
                "Listing title cannot be empty".to_string(),
            ));
        }

        if self.price_per_night <= 0.0 {
            return Err(crate::error::AgentError::validation(format!(
                "Invalid nightly price: {}",
                self.price_per_night
            )));
        }

        if self.available_to < self.available_from {
            return Err(crate::error::AgentError::validation(format!(
                "Availability window ends before it starts: {} > {}",
                self.available_from, self.available_to
            )));
        }

        Ok(())
    }
}
