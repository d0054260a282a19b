use crate::artifacts::snapshot::DirectorySnapshot;
use crate::artifacts::snapshot::file_descriptor::FileDescriptor;
use crate::artifacts::snapshot::name_filter::NameFilter;
use crate::errors::DiffError;
use std::fs::{DirEntry, Metadata};
use std::path::Path;
use tracing::{debug, warn};

/// One directory whose immediate files are compared.
#[derive(Debug)]
pub struct Directory {
    path: Box<Path>,
}

impl Directory {
    pub fn new(path: Box<Path>) -> Self {
        Directory { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lists the immediate entries; any failure to open or read the listing
    /// fails the whole call.
    pub fn list_entries(&self) -> Result<Vec<DirEntry>, DiffError> {
        std::fs::read_dir(&self.path)
            .map_err(|e| DiffError::directory_access(self.path(), e))?
            .map(|entry| entry.map_err(|e| DiffError::directory_access(self.path(), e)))
            .collect()
    }

    pub fn stat_file(&self, file_path: &Path) -> Result<Metadata, DiffError> {
        std::fs::metadata(file_path).map_err(|source| DiffError::EntryStat {
            path: file_path.to_path_buf(),
            source,
        })
    }

    /// Captures the regular files whose names match `filter`.
    ///
    /// Subdirectories are skipped. A malformed pattern or a failed re-stat only
    /// drops the entry concerned and is logged.
    pub fn snapshot(&self, filter: &NameFilter) -> Result<DirectorySnapshot, DiffError> {
        let mut snapshot = DirectorySnapshot::new();

        for entry in self.list_entries()? {
            if entry.file_type().is_ok_and(|file_type| file_type.is_dir()) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            match filter.matches(&name) {
                Ok(true) => {}
                Ok(false) => {
                    debug!(name = %name, pattern = filter.pattern(), "skipping unmatched entry");
                    continue;
                }
                Err(err) => {
                    warn!("{}", err);
                    continue;
                }
            }

            // the listing may carry stale metadata, so stat the joined path again
            let path = entry.path();
            let metadata = match self.stat_file(&path) {
                Ok(metadata) => metadata,
                Err(err) => {
                    warn!("{}", err);
                    continue;
                }
            };

            if !metadata.is_file() {
                debug!(path = %path.display(), "skipping entry that is not a regular file");
                continue;
            }

            let key = filter.key(&name);
            let descriptor = FileDescriptor::new(metadata.len(), path, name);
            if let Some(replaced) = snapshot.insert(key, descriptor) {
                debug!(name = %replaced.name, "entry replaced by a name differing only in case");
            }
        }

        debug!(
            path = %self.path.display(),
            entries = snapshot.len(),
            "snapshot taken"
        );

        Ok(snapshot)
    }
}
