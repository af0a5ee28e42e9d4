// file: src/queue/mod.rs
// version: 1.0.0
// guid: e17b3c84-5d06-4a29-b7f5-90c2e6d8a143

//! File-backed task queue
//!
//! The broker is a directory of JSON task envelopes. Producers write a
//! `Queued` envelope and return immediately with its tracking identifier;
//! a separately started worker process claims envelopes oldest-first and
//! records the outcome in place. Keeping the envelope on disk is what lets
//! the diagnostic command exit while the task is still pending.

pub mod client;
pub mod task;
pub mod worker;

pub use client::{QueueClient, TaskHandle};
pub use task::{TaskEnvelope, TaskState};
pub use worker::Worker;
