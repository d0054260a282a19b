//! Snapshot classification
//!
//! - `classification`: Change types and the records reported for them
//! - `comparator`: Walks a baseline and a candidate snapshot and classifies each name

pub mod classification;
pub mod comparator;
