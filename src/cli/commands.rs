// file: src/cli/commands.rs
// version: 1.0.0
// guid: 57fa03db-2b84-4c96-e5dc-67b9f1c4a8b0

//! Command implementations for the CLI

use crate::{
    config::AgentConfig,
    model::{Booking, Listing},
    queue::{QueueClient, Worker},
    store::FixtureStore,
    tasks::{self, TaskContext},
    Result,
};
use colored::Colorize;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Exercise the task queue end to end: create a fixture listing/booking
/// pair, then invoke the confirmation task inline (`--sync`) or submit it
/// to the broker and report the tracking id without waiting.
pub async fn test_queue_command(config: &AgentConfig, sync: bool) -> Result<()> {
    println!("{}", "=== Testing Background Tasks ===".green());

    let store = FixtureStore::new(&config.data_dir);
    let today = chrono::Local::now().date_naive();

    let listing = Listing::fixture(today);
    store.create_listing(&listing).await?;
    println!("{}", format!("Created test listing: {}", listing.title).green());

    let booking = Booking::fixture(listing.id, today);
    store.create_booking(&booking).await?;
    println!(
        "{}",
        format!("Created test booking: {}", booking.booking_id).green()
    );

    let ctx = TaskContext::from_config(config);

    if sync {
        println!("Running email task synchronously...");
        let result =
            tasks::send_booking_confirmation_email(&ctx, &booking.booking_id.to_string()).await?;

        if result {
            println!("{}", "✅ Email task completed successfully".green());
        } else {
            println!("{}", "❌ Email task failed".red());
        }
    } else {
        println!("Triggering email task asynchronously...");
        let client = QueueClient::new(&config.queue_dir);
        let handle = client
            .enqueue(
                tasks::SEND_BOOKING_CONFIRMATION_EMAIL,
                vec![booking.booking_id.to_string()],
            )
            .await?;

        println!(
            "{}",
            format!("Task submitted with ID: {}", handle.id).green()
        );
        println!(
            "{}",
            "Check the worker logs to see the task execution".yellow()
        );
    }

    println!("{}", "=== Test Complete ===".green());
    println!("Make sure the worker is running:");
    println!("booking-notify-agent worker");

    Ok(())
}

/// Run the broker consumer loop
pub async fn worker_command(
    config: &AgentConfig,
    poll_interval_ms: Option<u64>,
    max_cycles: Option<u64>,
) -> Result<()> {
    let interval = poll_interval_ms.unwrap_or(config.worker_poll_interval_ms);
    if interval == 0 {
        return Err(crate::error::AgentError::validation(
            "Poll interval must be greater than zero".to_string(),
        ));
    }

    let client = QueueClient::new(&config.queue_dir);
    let ctx = TaskContext::from_config(config);
    let worker = Worker::new(client, ctx, Duration::from_millis(interval));

    worker.run(max_cycles).await
}

/// Inspect one task envelope by tracking identifier
pub async fn status_command(config: &AgentConfig, id: &str, json_output: bool) -> Result<()> {
    let task_id = Uuid::parse_str(id).map_err(|_| {
        crate::error::AgentError::validation(format!("Invalid task id: {}", id))
    })?;

    let client = QueueClient::new(&config.queue_dir);
    let envelope = client.task_status(task_id).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("Task:       {}", envelope.task);
        println!("ID:         {}", envelope.id);
        println!("State:      {}", envelope.state.as_str());
        println!("Enqueued:   {}", envelope.enqueued_at.format("%Y-%m-%d %H:%M:%S"));
        if let Some(started) = envelope.started_at {
            println!("Started:    {}", started.format("%Y-%m-%d %H:%M:%S"));
        }
        if let Some(finished) = envelope.finished_at {
            println!("Finished:   {}", finished.format("%Y-%m-%d %H:%M:%S"));
        }
        if let Some(error) = &envelope.error {
            println!("Error:      {}", error);
        }
    }

    Ok(())
}

/// List fixture listings and bookings
pub async fn list_command(config: &AgentConfig, json_output: bool) -> Result<()> {
    let store = FixtureStore::new(&config.data_dir);
    let listings = store.list_listings().await?;
    let bookings = store.list_bookings().await?;

    if json_output {
        let combined = serde_json::json!({
            "listings": listings,
            "bookings": bookings,
        });
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    if listings.is_empty() && bookings.is_empty() {
        info!("No fixture records found");
        return Ok(());
    }

    println!("Listings:");
    println!(
        "{:<36} {:<24} {:>10} {:<12} {:<12}",
        "ID", "Title", "Price", "From", "To"
    );
    println!("{:-<98}", "");
    for listing in &listings {
        println!(
            "{:<36} {:<24} {:>10.2} {:<12} {:<12}",
            listing.id,
            listing.title,
            listing.price_per_night,
            listing.available_from.to_string(),
            listing.available_to.to_string()
        );
    }

    println!();
    println!("Bookings:");
    println!(
        "{:<36} {:<24} {:<12} {:<12}",
        "ID", "User", "Start", "End"
    );
    println!("{:-<86}", "");
    for booking in &bookings {
        println!(
            "{:<36} {:<24} {:<12} {:<12}",
            booking.booking_id,
            booking.user,
            booking.start_date.to_string(),
            booking.end_date.to_string()
        );
    }

    info!(
        "Found {} listing(s) and {} booking(s)",
        listings.len(),
        bookings.len()
    );
    Ok(())
}

/// Cleanup old fixture records
pub async fn cleanup_command(
    config: &AgentConfig,
    older_than_days: u32,
    dry_run: bool,
) -> Result<()> {
    info!(
        "Cleaning up fixture records older than {} days",
        older_than_days
    );

    let store = FixtureStore::new(&config.data_dir);
    let (listings, bookings) = store.find_old_fixtures(older_than_days).await?;

    if listings.is_empty() && bookings.is_empty() {
        info!("No old fixture records found for cleanup");
        return Ok(());
    }

    if dry_run {
        info!(
            "DRY RUN: Would delete {} listing(s) and {} booking(s):",
            listings.len(),
            bookings.len()
        );
        for listing in &listings {
            info!("  listing {} - {}", listing.id, listing.title);
        }
        for booking in &bookings {
            info!("  booking {} - {}", booking.booking_id, booking.user);
        }
        return Ok(());
    }

    let deleted = store.cleanup(older_than_days).await?;
    info!("Successfully deleted {} old fixture records", deleted);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::TaskState;
    use tempfile::TempDir;

    fn config_at(root: &std::path::Path) -> AgentConfig {
        AgentConfig::rooted_at(root)
    }

    #[tokio::test]
    async fn test_test_queue_async_creates_pair_and_envelope() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        test_queue_command(&config, false).await.unwrap();

        let store = FixtureStore::new(&config.data_dir);
        assert_eq!(store.list_listings().await.unwrap().len(), 1);
        assert_eq!(store.list_bookings().await.unwrap().len(), 1);

        // One queued envelope, not yet executed
        let client = QueueClient::new(&config.queue_dir);
        let envelopes = client.list_envelopes().await.unwrap();
        assert_eq!(envelopes.len(), 1);
        assert_eq!(envelopes[0].state, TaskState::Queued);

        // Async mode never produces the email itself
        assert!(!config.outbox_dir.exists());
    }

    #[tokio::test]
    async fn test_test_queue_sync_delivers_email() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        test_queue_command(&config, true).await.unwrap();

        let store = FixtureStore::new(&config.data_dir);
        let bookings = store.list_bookings().await.unwrap();
        assert_eq!(bookings.len(), 1);

        let email_path = config
            .outbox_dir
            .join(format!("{}.eml", bookings[0].booking_id));
        assert!(email_path.exists());

        // Sync mode bypasses the broker entirely
        let client = QueueClient::new(&config.queue_dir);
        assert!(client.list_envelopes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_consecutive_runs_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        test_queue_command(&config, false).await.unwrap();
        test_queue_command(&config, false).await.unwrap();

        let store = FixtureStore::new(&config.data_dir);
        assert_eq!(store.list_listings().await.unwrap().len(), 2);
        assert_eq!(store.list_bookings().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_worker_command_bounded_run() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        test_queue_command(&config, false).await.unwrap();
        worker_command(&config, Some(10), Some(1)).await.unwrap();

        let client = QueueClient::new(&config.queue_dir);
        let envelopes = client.list_envelopes().await.unwrap();
        assert_eq!(envelopes.len(), 1);
        assert_eq!(envelopes[0].state, TaskState::Succeeded);
    }

    #[tokio::test]
    async fn test_worker_command_rejects_zero_interval() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        let result = worker_command(&config, Some(0), Some(1)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_status_command_invalid_id() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        let result = status_command(&config, "not-a-uuid", false).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_status_command_unknown_id() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());
        QueueClient::new(&config.queue_dir).initialize().await.unwrap();

        let result = status_command(&config, &Uuid::new_v4().to_string(), false).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_command_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        let result = list_command(&config, false).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_cleanup_dry_run_deletes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_at(temp_dir.path());

        test_queue_command(&config, false).await.unwrap();
        cleanup_command(&config, 0, true).await.unwrap();

        let store = FixtureStore::new(&config.data_dir);
        assert_eq!(store.list_listings().await.unwrap().len(), 1);
        assert_eq!(store.list_bookings().await.unwrap().len(), 1);
    }
}
