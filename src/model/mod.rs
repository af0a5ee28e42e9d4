// file: src/model/mod.rs
// version: 1.0.0
// guid: 2b6e0d95-8f13-4a72-b40c-75d9e1a38c61

//! Domain records exercised by the diagnostic command
//!
//! Both types are disposable fixtures: the diagnostic creates a fresh pair
//! on every run and never deduplicates them.

pub mod booking;
pub mod listing;

pub use booking::Booking;
pub use listing::Listing;
