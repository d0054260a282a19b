//! Directory comparison data structures and algorithms
//!
//! - `classify`: Change types, classification records and the snapshot comparator
//! - `core`: Comparison options
//! - `equality`: File equality strategies (byte stream, content hash)
//! - `snapshot`: File descriptors, directory snapshots and name filtering

pub mod classify;
pub mod core;
pub mod equality;
pub mod snapshot;
