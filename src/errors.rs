//! Error taxonomy for directory comparison
//!
//! Scan-time problems with a single entry (`InvalidPattern`, `EntryStat`) are
//! logged and the entry is skipped; they are never returned from a snapshot.
//! Everything else aborts the whole diff.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiffError {
    /// Fewer than two directories were given.
    #[error("Usage: {program} BASELINE CANDIDATE")]
    Usage { program: String },

    /// A root directory could not be opened or listed.
    #[error("{}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The filter pattern is malformed.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A matched entry could not be re-stat'ed.
    #[error("{}: {source}", .path.display())]
    EntryStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file could not be read while comparing contents.
    #[error("{}: {source}", .path.display())]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DiffError {
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    pub fn content_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DiffError::ContentRead {
            path: path.into(),
            source,
        }
    }

    /// Whether the error only affects a single scanned entry.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DiffError::InvalidPattern { .. } | DiffError::EntryStat { .. }
        )
    }
}
