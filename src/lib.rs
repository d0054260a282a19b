//! Non-recursive directory comparison
//!
//! Two directories are snapshotted (immediate regular files only, filtered by a
//! case-insensitive glob) and every file name is classified as added, deleted or
//! modified relative to the baseline.
//!
//! - `areas`: filesystem-facing components (directory scanning, comparison session)
//! - `artifacts`: snapshots, equality strategies and classification
//! - `commands`: the user-facing compare command
//! - `errors`: error taxonomy
//! - `logging`: tracing setup for the binary

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod logging;
