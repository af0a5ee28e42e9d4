// file: src/queue/client.rs
// version: 1.0.0
// guid: 0a3d5e86-7f28-4c41-b9d7-12e4a8f0c365

//! Queue client: enqueue and inspect task envelopes

use super::task::TaskEnvelope;
use crate::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Handle returned by a fire-and-forget enqueue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle {
    /// Task tracking identifier
    pub id: Uuid,
}

/// Client for the file-backed task broker
pub struct QueueClient {
    queue_dir: PathBuf,
}

impl QueueClient {
    /// Create a client against the given broker directory
    pub fn new(queue_dir: impl Into<PathBuf>) -> Self {
        Self {
            queue_dir: queue_dir.into(),
        }
    }

    /// Broker directory this client operates on
    pub fn queue_dir(&self) -> &Path {
        &self.queue_dir
    }

    /// Initialize the broker directory
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.queue_dir).await?;
        Ok(())
    }

    /// Submit a task for deferred execution. Returns immediately with the
    /// tracking handle; never waits for or inspects the outcome.
    pub async fn enqueue(&self, task: impl Into<String>, args: Vec<String>) -> Result<TaskHandle> {
        self.initialize().await?;

        let envelope = TaskEnvelope::new(task, args);
        let id = envelope.id;
        self.save_envelope(&envelope).await?;

        debug!("Enqueued task {} as {}", envelope.task, id);
        Ok(TaskHandle { id })
    }

    /// Read back the envelope for a tracking identifier
    pub async fn task_status(&self, id: Uuid) -> Result<TaskEnvelope> {
        let path = self.envelope_path(id);
        if !path.exists() {
            return Err(crate::error::AgentError::not_found(format!("task {}", id)));
        }

        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// List all envelopes currently in the broker directory
    pub async fn list_envelopes(&self) -> Result<Vec<TaskEnvelope>> {
        let mut envelopes = Vec::new();

        if !self.queue_dir.exists() {
            return Ok(envelopes);
        }

        let mut entries = fs::read_dir(&self.queue_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let content = fs::read_to_string(&path).await?;
                match serde_json::from_str(&content) {
                    Ok(envelope) => envelopes.push(envelope),
                    Err(e) => debug!("Skipping malformed envelope {}: {}", path.display(), e),
                }
            }
        }

        envelopes.sort_by(|a: &TaskEnvelope, b: &TaskEnvelope| a.enqueued_at.cmp(&b.enqueued_at));
        Ok(envelopes)
    }

    /// Persist an envelope, replacing any previous version
    pub async fn save_envelope(&self, envelope: &TaskEnvelope) -> Result<()> {
        self.initialize().await?;
        let path = self.envelope_path(envelope.id);
        let content = serde_json::to_string_pretty(envelope)?;
        fs::write(&path, content).await?;
        Ok(())
    }

    fn envelope_path(&self, id: Uuid) -> PathBuf {
        self.queue_dir.join(format!("{}.json", id))
    }
}
