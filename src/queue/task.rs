// file: src/queue/task.rs
// version: 1.0.0
// guid: f28c4d95-6e17-4b30-a8c6-01d3f7e9b254

//! Task envelope structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a queued task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    #[serde(rename = "queued")]
    Queued,
    #[serde(rename = "running")]
    Running,
    #[serde(rename = "succeeded")]
    Succeeded,
    #[serde(rename = "failed")]
    Failed,
}

impl TaskState {
    /// Get the state as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Queued => "queued",
            TaskState::Running => "running",
            TaskState::Succeeded => "succeeded",
            TaskState::Failed => "failed",
        }
    }

    /// Whether the task has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed)
    }
}

/// A persisted unit of deferred work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskEnvelope {
    /// Task tracking identifier
    pub id: Uuid,
    /// Registered task name
    pub task: String,
    /// Positional string arguments
    pub args: Vec<String>,
    /// Current lifecycle state
    pub state: TaskState,
    /// When the envelope was enqueued
    pub enqueued_at: DateTime<Utc>,
    /// When a worker claimed the envelope
    pub started_at: Option<DateTime<Utc>>,
    /// When execution finished
    pub finished_at: Option<DateTime<Utc>>,
    /// Error message for failed tasks
    pub error: Option<String>,
}

impl TaskEnvelope {
    /// Create a fresh queued envelope
    pub fn new(task: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: task.into(),
            args,
            state: TaskState::Queued,
            enqueued_at: Utc::now(),
            started_at: None,
            finished_at: None,
            error: None,
        }
    }

    /// Mark the envelope as claimed by a worker
    pub fn mark_running(&mut self) {
        self.state = TaskState::Running;
        self.started_at = Some(Utc::now());
    }

    /// Mark the envelope as completed successfully
    pub fn mark_succeeded(&mut self) {
        self.state = TaskState::Succeeded;
        self.finished_at = Some(Utc::now());
    }

    /// Mark the envelope as failed with an error message
    pub fn mark_failed(&mut self, error: impl Into<String>) {
        self.state = TaskState::Failed;
        self.finished_at = Some(Utc::now());
        self.error = Some(error.into());
    }
}
