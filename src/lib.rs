// file: src/lib.rs
// version: 1.0.0
// guid: 9e4b7d20-1c5a-4f83-b6e9-2a8d40c17f35

//! # Booking Notify Agent
//!
//! Diagnostic agent for exercising the booking confirmation notification
//! pipeline: fixture records, a file-backed task queue, and a worker loop
//! that delivers confirmation emails to an outbox directory.
//!
//! The `test-queue` command reproduces the manual smoke test used against
//! the production queue: it creates a disposable listing/booking pair and
//! triggers the confirmation task either inline or through the broker.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod queue;
pub mod store;
pub mod tasks;

pub use error::{AgentError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
