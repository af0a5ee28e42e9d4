// file: src/main.rs
// version: 1.0.0
// guid: 68ab14ec-3c95-4da7-f6ed-78ca02d5b9c1

//! Booking Notify Agent - Main entry point

use booking_notify_agent::{
    cli::{args::Cli, commands::*},
    config::ConfigLoader,
    logging::logger,
    Result,
};
use clap::Parser;
use tokio::signal;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    // Resolve configuration before dispatching
    let loader = ConfigLoader::new();
    let config = loader.load_or_default(cli.config.as_deref())?;

    // Set up signal handling for graceful shutdown
    let shutdown_signal = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        warn!("Received Ctrl+C, shutting down...");
    };

    // Execute command with signal handling
    let command_future = async {
        match cli.command {
            booking_notify_agent::cli::args::Commands::TestQueue { sync } => {
                test_queue_command(&config, sync).await
            }
            booking_notify_agent::cli::args::Commands::Worker {
                poll_interval_ms,
                max_cycles,
            } => worker_command(&config, poll_interval_ms, max_cycles).await,
            booking_notify_agent::cli::args::Commands::Status { id, json } => {
                status_command(&config, &id, json).await
            }
            booking_notify_agent::cli::args::Commands::List { json } => {
                list_command(&config, json).await
            }
            booking_notify_agent::cli::args::Commands::Cleanup {
                older_than_days,
                dry_run,
            } => cleanup_command(&config, older_than_days, dry_run).await,
        }
    };

    // Run command with signal handling
    tokio::select! {
        result = command_future => result,
        _ = shutdown_signal => {
            warn!("Application interrupted by user");
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
