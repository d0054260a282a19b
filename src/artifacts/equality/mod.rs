//! File equality strategies
//!
//! Both strategies share the size short-circuit in `FileEquality::equals`: files
//! of different sizes are unequal and their contents are never opened.
//!
//! - `byte_compare`: Streams both files and compares them byte by byte
//! - `hash_compare`: Reads both files fully and compares SHA-1 digests

pub mod byte_compare;
pub mod hash_compare;

use crate::artifacts::snapshot::file_descriptor::FileDescriptor;
use crate::errors::DiffError;
use byte_compare::ByteCompare;
use hash_compare::HashCompare;
use tracing::debug;

pub trait FileEquality {
    fn name(&self) -> &'static str;

    /// Compares contents of two files already known to have the same size.
    fn content_equals(
        &self,
        left: &FileDescriptor,
        right: &FileDescriptor,
    ) -> Result<bool, DiffError>;

    fn equals(&self, left: &FileDescriptor, right: &FileDescriptor) -> Result<bool, DiffError> {
        if left.size != right.size {
            debug!(
                left = %left.path.display(),
                right = %right.path.display(),
                "sizes differ ({} != {})",
                left.size,
                right.size
            );
            return Ok(false);
        }

        let equal = self.content_equals(left, right)?;
        debug!(strategy = self.name(), name = %left.name, equal, "compared contents");

        Ok(equal)
    }
}

/// Selects the equality strategy used for files present in both directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CompareMode {
    /// Stream both files and compare byte by byte
    #[default]
    Bytes,
    /// Read both files and compare content digests
    Hash,
}

impl CompareMode {
    pub fn strategy(&self) -> Box<dyn FileEquality> {
        match self {
            CompareMode::Bytes => Box::new(ByteCompare::default()),
            CompareMode::Hash => Box::new(HashCompare),
        }
    }
}
