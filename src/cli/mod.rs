// file: src/cli/mod.rs
// version: 1.0.0
// guid: 35d8e1b9-0f62-4a74-c3ba-45f7d9a2e698

//! Command line interface for the booking notification agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
