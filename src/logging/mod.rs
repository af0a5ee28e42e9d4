// file: src/logging/mod.rs
// version: 1.0.0
// guid: 6d2f9a84-3e71-4c05-9b28-f41a6c8d0e53

//! Logging system for the booking notification agent

pub mod logger;

pub use logger::init_logger;
