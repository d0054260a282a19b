//! Filesystem-facing components
//!
//! - `directory`: Scans one directory into a snapshot
//! - `session`: A baseline/candidate pair plus options and the report writer

pub mod directory;
pub mod session;
