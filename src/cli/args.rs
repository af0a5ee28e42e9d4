// file: src/cli/args.rs
// version: 1.0.0
// guid: 46e9f2ca-1a73-4b85-d4cb-56a8e0b3f7a9

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "booking-notify-agent")]
#[command(about = "Diagnostic agent for the booking confirmation task queue")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(short, long, global = true, help = "Path to agent configuration YAML")]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Exercise the task queue with disposable fixture records
    TestQueue {
        #[arg(long, help = "Run the notification task synchronously")]
        sync: bool,
    },

    /// Run the task queue worker
    Worker {
        #[arg(long, help = "Override the poll interval in milliseconds")]
        poll_interval_ms: Option<u64>,

        #[arg(long, help = "Stop after this many poll cycles")]
        max_cycles: Option<u64>,
    },

    /// Inspect a submitted task by tracking identifier
    Status {
        #[arg(short, long)]
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// List fixture listings and bookings
    List {
        #[arg(long)]
        json: bool,
    },

    /// Cleanup old fixture records
    Cleanup {
        #[arg(long, default_value = "30")]
        older_than_days: u32,

        #[arg(long)]
        dry_run: bool,
    },
}
