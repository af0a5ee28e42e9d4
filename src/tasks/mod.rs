// file: src/tasks/mod.rs
// version: 1.0.0
// guid: 1b4e6f97-8a39-4d52-90e8-23f5b9a1d476

//! Background task implementations and registry
//!
//! The broker stores task names rather than closures, so envelopes survive
//! across processes; `dispatch` is the worker-side lookup from name to
//! implementation. Task functions take string arguments and signal soft
//! failure by returning `Ok(false)`, reserving `Err` for infrastructure
//! failures (IO, serialization).

use crate::config::AgentConfig;
use crate::store::FixtureStore;
use crate::Result;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, warn};
use uuid::Uuid;

/// Registered name of the booking confirmation task
pub const SEND_BOOKING_CONFIRMATION_EMAIL: &str = "send_booking_confirmation_email";

/// Shared collaborators handed to task implementations
pub struct TaskContext {
    /// Fixture record store
    pub store: FixtureStore,
    /// Directory where rendered emails are written
    pub outbox_dir: PathBuf,
}

impl TaskContext {
    /// Build a task context from the agent configuration
    pub fn from_config(config: &AgentConfig) -> Self {
        Self {
            store: FixtureStore::new(&config.data_dir),
            outbox_dir: config.outbox_dir.clone(),
        }
    }
}

/// Resolve a task by its registered name and execute it
pub async fn dispatch(ctx: &TaskContext, name: &str, args: &[String]) -> Result<bool> {
    match name {
        SEND_BOOKING_CONFIRMATION_EMAIL => {
            let booking_id = args.first().ok_or_else(|| {
                crate::error::AgentError::task(format!("{} requires a booking id argument", name))
            })?;
            send_booking_confirmation_email(ctx, booking_id).await
        }
        other => Err(crate::error::AgentError::task(format!(
            "Unknown task: {}",
            other
        ))),
    }
}

/// Render and deliver the booking confirmation email for the given booking
/// identifier. Returns `Ok(false)` when the id does not resolve to a
/// booking (or its listing), `Ok(true)` once the message is in the outbox.
pub async fn send_booking_confirmation_email(ctx: &TaskContext, booking_id: &str) -> Result<bool> {
    let id = match Uuid::parse_str(booking_id) {
        Ok(id) => id,
        Err(_) => {
            warn!("Invalid booking id: {}", booking_id);
            return Ok(false);
        }
    };

    let booking = match ctx.store.load_booking(id).await {
        Ok(booking) => booking,
        Err(crate::error::AgentError::NotFound(_)) => {
            warn!("Booking {} not found, skipping confirmation email", id);
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    let listing = match ctx.store.load_listing(booking.listing_id).await {
        Ok(listing) => listing,
        Err(crate::error::AgentError::NotFound(_)) => {
            warn!(
                "Listing {} for booking {} not found, skipping confirmation email",
                booking.listing_id, id
            );
            return Ok(false);
        }
        Err(e) => return Err(e),
    };

    let nights = booking.nights();
    let total = listing.price_per_night * nights as f64;

    let message = format!(
        "To: {to}\n\
         Subject: Booking Confirmation - {title}\n\
         \n\
         Your booking has been confirmed!\n\
         \n\
         Booking ID: {id}\n\
         Property: {title}\n\
         Check-in: {start}\n\
         Check-out: {end}\n\
         Nights: {nights}\n\
         Price per night: ${price:.2}\n\
         Total: ${total:.2}\n\
         \n\
         Thank you for booking with us!\n",
        to = booking.user,
        title = listing.title,
        id = booking.booking_id,
        start = booking.start_date,
        end = booking.end_date,
        nights = nights,
        price = listing.price_per_night,
        total = total,
    );

    fs::create_dir_all(&ctx.outbox_dir).await?;
    let path = ctx.outbox_dir.join(format!("{}.eml", booking.booking_id));
    fs::write(&path, message).await?;

    info!(
        "Confirmation email for booking {} written to {}",
        booking.booking_id,
        path.display()
    );
    Ok(true)
}
