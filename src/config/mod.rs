// file: src/config/mod.rs
// version: 1.0.0
// guid: c4a91f06-7d28-4b53-8e60-19f5b2a7c348

//! Configuration module for the booking notification agent
//!
//! Handles loading and validation of the agent configuration: where fixture
//! records live, where the task broker keeps its envelopes, and where the
//! notification task writes rendered emails.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Agent configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Root directory for fixture records (listings/, bookings/)
    pub data_dir: PathBuf,
    /// Directory holding task envelopes for the broker
    pub queue_dir: PathBuf,
    /// Directory where rendered confirmation emails are written
    pub outbox_dir: PathBuf,
    /// Worker poll interval in milliseconds
    pub worker_poll_interval_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        let root = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join("booking-notify-agent");

        Self {
            data_dir: root.join("data"),
            queue_dir: root.join("queue"),
            outbox_dir: root.join("outbox"),
            worker_poll_interval_ms: 1000,
        }
    }
}

impl AgentConfig {
    /// Validate the configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.worker_poll_interval_ms == 0 {
            return Err(crate::error::AgentError::validation(
                "Worker poll interval must be greater than zero".to_string(),
            ));
        }

        if self.data_dir.as_os_str().is_empty()
            || self.queue_dir.as_os_str().is_empty()
            || self.outbox_dir.as_os_str().is_empty()
        {
            return Err(crate::error::AgentError::validation(
                "Configuration directories cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build a configuration rooted at a single directory, used by tests
    /// and ad-hoc runs against a scratch location.
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data_dir: root.join("data"),
            queue_dir: root.join("queue"),
            outbox_dir: root.join("outbox"),
            worker_poll_interval_ms: 1000,
        }
    }
}
