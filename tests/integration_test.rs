// file: tests/integration_test.rs
// version: 1.0.0
// guid: 79bc25fd-4da6-4eb8-a7fe-89db13e6c0d2

//! Integration tests for the booking notification agent

use booking_notify_agent::{
    config::{loader::ConfigLoader, AgentConfig},
    model::{Booking, Listing},
    queue::{QueueClient, TaskState, Worker},
    store::FixtureStore,
    tasks::{self, TaskContext},
    Result,
};
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_config_loading_integration() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();

    let config_content = format!(
        r#"
data_dir: {root}/data
queue_dir: {root}/queue
outbox_dir: {root}/outbox
worker_poll_interval_ms: 100
"#,
        root = temp_dir.path().display()
    );

    let config_path = temp_dir.path().join("agent.yaml");
    tokio::fs::write(&config_path, config_content).await?;

    let loader = ConfigLoader::new();
    let config = loader.load_agent_config(&config_path)?;

    assert_eq!(config.worker_poll_interval_ms, 100);
    assert!(config.queue_dir.ends_with("queue"));

    Ok(())
}

#[tokio::test]
async fn test_fixture_pair_through_store() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let store = FixtureStore::new(temp_dir.path().join("data"));

    let today = chrono::Local::now().date_naive();
    let listing = Listing::fixture(today);
    let booking = Booking::fixture(listing.id, today);

    store.create_listing(&listing).await?;
    store.create_booking(&booking).await?;

    // The fixture windows the diagnostic relies on
    assert_eq!(
        listing.available_to - listing.available_from,
        chrono::Duration::days(30)
    );
    assert_eq!(booking.nights(), 3);
    assert_eq!(booking.start_date - today, chrono::Duration::days(5));

    let loaded = store.load_booking(booking.booking_id).await?;
    assert_eq!(loaded.listing_id, listing.id);

    Ok(())
}

#[tokio::test]
async fn test_enqueue_and_drain_workflow() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = AgentConfig::rooted_at(temp_dir.path());

    // Seed a fixture pair the task can resolve
    let store = FixtureStore::new(&config.data_dir);
    let today = chrono::Local::now().date_naive();
    let listing = Listing::fixture(today);
    let booking = Booking::fixture(listing.id, today);
    store.create_listing(&listing).await?;
    store.create_booking(&booking).await?;

    // Producer side: fire and forget
    let client = QueueClient::new(&config.queue_dir);
    let handle = client
        .enqueue(
            tasks::SEND_BOOKING_CONFIRMATION_EMAIL,
            vec![booking.booking_id.to_string()],
        )
        .await?;

    let envelope = client.task_status(handle.id).await?;
    assert_eq!(envelope.state, TaskState::Queued);

    // Consumer side: one drain pass delivers the email
    let worker = Worker::new(
        QueueClient::new(&config.queue_dir),
        TaskContext::from_config(&config),
        Duration::from_millis(10),
    );
    let processed = worker.run_once().await?;
    assert_eq!(processed, 1);

    let envelope = client.task_status(handle.id).await?;
    assert_eq!(envelope.state, TaskState::Succeeded);

    let email_path = config
        .outbox_dir
        .join(format!("{}.eml", booking.booking_id));
    let email = tokio::fs::read_to_string(email_path).await?;
    assert!(email.contains(&booking.booking_id.to_string()));
    assert!(email.contains("Test Vacation Home"));

    Ok(())
}

#[tokio::test]
async fn test_sync_invocation_bypasses_broker() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = AgentConfig::rooted_at(temp_dir.path());

    let store = FixtureStore::new(&config.data_dir);
    let today = chrono::Local::now().date_naive();
    let listing = Listing::fixture(today);
    let booking = Booking::fixture(listing.id, today);
    store.create_listing(&listing).await?;
    store.create_booking(&booking).await?;

    let ctx = TaskContext::from_config(&config);
    let result =
        tasks::send_booking_confirmation_email(&ctx, &booking.booking_id.to_string()).await?;
    assert!(result);

    // No envelope was ever created
    let client = QueueClient::new(&config.queue_dir);
    assert!(client.list_envelopes().await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_failed_task_is_recorded() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config = AgentConfig::rooted_at(temp_dir.path());
    FixtureStore::new(&config.data_dir).initialize().await?;

    let client = QueueClient::new(&config.queue_dir);
    let handle = client
        .enqueue("not_a_registered_task", vec![])
        .await?;

    let worker = Worker::new(
        QueueClient::new(&config.queue_dir),
        TaskContext::from_config(&config),
        Duration::from_millis(10),
    );
    worker.run_once().await?;

    let envelope = client.task_status(handle.id).await?;
    assert_eq!(envelope.state, TaskState::Failed);
    assert!(envelope.error.is_some());

    Ok(())
}
