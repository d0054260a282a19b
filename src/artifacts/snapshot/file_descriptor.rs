use derive_new::new;
use std::path::PathBuf;

/// A regular file captured during a directory scan.
///
/// `size` and `path` come from the same re-stat call, so the size is the one
/// observed at scan time. `name` keeps the original casing for reporting.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileDescriptor {
    pub size: u64,
    pub path: PathBuf,
    pub name: String,
}
