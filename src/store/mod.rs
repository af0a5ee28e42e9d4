// file: src/store/mod.rs
// version: 1.0.0
// guid: d90a4b27-6c58-4e91-83f0-2e7d15c9a6b3

//! File-backed fixture store
//!
//! Records are kept one JSON file per entity under the configured data
//! directory (`listings/<id>.json`, `bookings/<id>.json`). There is no
//! uniqueness enforcement beyond the generated identifiers and no
//! transactionality: every diagnostic run appends a fresh pair, which is
//! why the `cleanup` command exists.

use crate::model::{Booking, Listing};
use crate::Result;
use chrono::{Duration, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Store for disposable listing and booking fixtures
pub struct FixtureStore {
    data_dir: PathBuf,
}

impl FixtureStore {
    /// Create a store rooted at the given data directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn listings_dir(&self) -> PathBuf {
        self.data_dir.join("listings")
    }

    fn bookings_dir(&self) -> PathBuf {
        self.data_dir.join("bookings")
    }

    /// Initialize the store (create record directories)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(self.listings_dir()).await?;
        fs::create_dir_all(self.bookings_dir()).await?;
        debug!("Fixture store initialized at {}", self.data_dir.display());
        Ok(())
    }

    /// Insert a listing record
    pub async fn create_listing(&self, listing: &Listing) -> Result<()> {
        listing.validate()?;
        self.initialize().await?;

        let path = self.listings_dir().join(format!("{}.json", listing.id));
        let content = serde_json::to_string_pretty(listing)?;
        fs::write(&path, content).await?;

        debug!("Created listing record {}", listing.id);
        Ok(())
    }

    /// Insert a booking record
    pub async fn create_booking(&self, booking: &Booking) -> Result<()> {
        booking.validate()?;
        self.initialize().await?;

        let path = self
            .bookings_dir()
            .join(format!("{}.json", booking.booking_id));
        let content = serde_json::to_string_pretty(booking)?;
        fs::write(&path, content).await?;

        debug!("Created booking record {}", booking.booking_id);
        Ok(())
    }

    /// Load a listing by identifier
    pub async fn load_listing(&self, id: Uuid) -> Result<Listing> {
        let path = self.listings_dir().join(format!("{}.json", id));
        if !path.exists() {
            return Err(crate::error::AgentError::not_found(format!(
                "listing {}",
                id
            )));
        }

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load a booking by identifier
    pub async fn load_booking(&self, id: Uuid) -> Result<Booking> {
        let path = self.bookings_dir().join(format!("{}.json", id));
        if !path.exists() {
            return Err(crate::error::AgentError::not_found(format!(
                "booking {}",
                id
            )));
        }

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// List all listing records, newest first
    pub async fn list_listings(&self) -> Result<Vec<Listing>> {
        let mut listings: Vec<Listing> = Self::read_records(&self.listings_dir()).await?;
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    /// List all booking records, newest first
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let mut bookings: Vec<Booking> = Self::read_records(&self.bookings_dir()).await?;
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    /// Find fixture records older than the given age
    pub async fn find_old_fixtures(
        &self,
        older_than_days: u32,
    ) -> Result<(Vec<Listing>, Vec<Booking>)> {
        let cutoff = Utc::now() - Duration::days(i64::from(older_than_days));

        let listings = self
            .list_listings()
            .await?
            .into_iter()
            .filter(|l| l.created_at < cutoff)
            .collect();
        let bookings = self
            .list_bookings()
            .await?
            .into_iter()
            .filter(|b| b.created_at < cutoff)
            .collect();

        Ok((listings, bookings))
    }

    /// Remove a listing record
    pub async fn remove_listing(&self, id: Uuid) -> Result<()> {
        let path = self.listings_dir().join(format!("{}.json", id));
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// Remove a booking record
    pub async fn remove_booking(&self, id: Uuid) -> Result<()> {
        let path = self.bookings_dir().join(format!("{}.json", id));
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    /// Delete fixture records older than the given age, returning the
    /// number of records removed.
    pub async fn cleanup(&self, older_than_days: u32) -> Result<usize> {
        let (listings, bookings) = self.find_old_fixtures(older_than_days).await?;
        let count = listings.len() + bookings.len();

        for booking in &bookings {
            self.remove_booking(booking.booking_id).await?;
        }
        for listing in &listings {
            self.remove_listing(listing.id).await?;
        }

        if count > 0 {
            info!("Removed {} old fixture records", count);
        }
        Ok(count)
    }

    async fn read_records<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
        let mut records = Vec::new();

        if !dir.exists() {
            return Ok(records);
        }

        let mut entries = fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let content = fs::read_to_string(&path).await?;
                match serde_json::from_str(&content) {
                    Ok(record) => records.push(record),
                    // Skip unreadable records rather than failing the scan
                    Err(e) => debug!("Skipping malformed record {}: {}", path.display(), e),
                }
            }
        }

        Ok(records)
    }
}
