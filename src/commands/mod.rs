//! Command implementations
//!
//! - `compare`: Snapshot two directories, classify the differences and report them

pub mod compare;
