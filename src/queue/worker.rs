// file: src/queue/worker.rs
// version: 1.0.0
// guid: 24c7d0a8-9e51-4f63-b2a9-34e6c8f1d587

//! Polling worker that drains the broker directory

use super::client::QueueClient;
use super::task::TaskState;
use crate::tasks::{self, TaskContext};
use crate::Result;
use std::time::Duration;
use tracing::{debug, error, info};

/// Consumer side of the file-backed task queue
pub struct Worker {
    client: QueueClient,
    ctx: TaskContext,
    poll_interval: Duration,
}

impl Worker {
    /// Create a worker against the given broker and task context
    pub fn new(client: QueueClient, ctx: TaskContext, poll_interval: Duration) -> Self {
        Self {
            client,
            ctx,
            poll_interval,
        }
    }

    /// Run the worker loop until the process is stopped. An optional cycle
    /// limit exists for bounded runs (`worker --max-cycles`).
    pub async fn run(&self, max_cycles: Option<u64>) -> Result<()> {
        self.client.initialize().await?;
        info!(
            "Worker started, polling {} every {}ms",
            self.client.queue_dir().display(),
            self.poll_interval.as_millis()
        );

        let mut cycles = 0u64;
        loop {
            let processed = self.run_once().await?;
            if processed > 0 {
                info!("Processed {} task(s)", processed);
            }

            cycles += 1;
            if let Some(max) = max_cycles {
                if cycles >= max {
                    info!("Reached cycle limit ({}), stopping worker", max);
                    return Ok(());
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Claim and execute every queued envelope once, oldest first.
    /// Returns the number of tasks processed.
    pub async fn run_once(&self) -> Result<usize> {
        let envelopes = self.client.list_envelopes().await?;
        let mut processed = 0;

        for mut envelope in envelopes {
            if envelope.state != TaskState::Queued {
                continue;
            }

            debug!("Claiming task {} ({})", envelope.id, envelope.task);
            envelope.mark_running();
            self.client.save_envelope(&envelope).await?;

            match tasks::dispatch(&self.ctx, &envelope.task, &envelope.args).await {
                Ok(true) => {
                    info!("Task {} succeeded", envelope.id);
                    envelope.mark_succeeded();
                }
                Ok(false) => {
                    error!("Task {} reported failure", envelope.id);
                    envelope.mark_failed("task returned a failure result");
                }
                Err(e) => {
                    error!("Task {} errored: {}", envelope.id, e);
                    envelope.mark_failed(e.to_string());
                }
            }

            self.client.save_envelope(&envelope).await?;
            processed += 1;
        }

        Ok(processed)
    }
}
