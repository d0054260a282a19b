use crate::artifacts::equality::FileEquality;
use crate::artifacts::snapshot::file_descriptor::FileDescriptor;
use crate::errors::DiffError;
use sha1::digest::Output;
use sha1::{Digest, Sha1};

/// Compares SHA-1 digests of the two files.
///
/// Each file is read fully into memory before hashing, which limits this
/// strategy to files that comfortably fit in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCompare;

impl HashCompare {
    fn digest(&self, descriptor: &FileDescriptor) -> Result<Output<Sha1>, DiffError> {
        let content = std::fs::read(&descriptor.path)
            .map_err(|e| DiffError::content_read(&descriptor.path, e))?;

        let mut hasher = Sha1::new();
        hasher.update(&content);

        Ok(hasher.finalize())
    }
}

impl FileEquality for HashCompare {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn content_equals(
        &self,
        left: &FileDescriptor,
        right: &FileDescriptor,
    ) -> Result<bool, DiffError> {
        Ok(self.digest(left)? == self.digest(right)?)
    }
}
