//! maphistory — history of visited map locations.
//!
//! Entries are deduplicated by a content hash, classified by type for display,
//! and carry distance/bearing recomputed against the user's current position.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod database;
pub mod managers;
pub mod services;
pub mod types;
