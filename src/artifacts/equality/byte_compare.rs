use crate::artifacts::equality::FileEquality;
use crate::artifacts::snapshot::file_descriptor::FileDescriptor;
use crate::errors::DiffError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Streams two files side by side; memory use is bounded by the buffer size.
#[derive(Debug, Clone)]
pub struct ByteCompare {
    buffer_size: usize,
}

impl ByteCompare {
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        ByteCompare {
            buffer_size: buffer_size.max(1),
        }
    }

    fn open(&self, path: &Path) -> Result<BufReader<File>, DiffError> {
        let file = File::open(path).map_err(|e| DiffError::content_read(path, e))?;
        Ok(BufReader::with_capacity(self.buffer_size, file))
    }
}

impl Default for ByteCompare {
    fn default() -> Self {
        ByteCompare::with_buffer_size(DEFAULT_BUFFER_SIZE)
    }
}

impl FileEquality for ByteCompare {
    fn name(&self) -> &'static str {
        "bytes"
    }

    fn content_equals(
        &self,
        left: &FileDescriptor,
        right: &FileDescriptor,
    ) -> Result<bool, DiffError> {
        let mut left_reader = self.open(&left.path)?;
        let mut right_reader = self.open(&right.path)?;

        loop {
            let left_chunk = left_reader
                .fill_buf()
                .map_err(|e| DiffError::content_read(&left.path, e))?;
            let right_chunk = right_reader
                .fill_buf()
                .map_err(|e| DiffError::content_read(&right.path, e))?;

            // both streams must end together
            match (left_chunk.is_empty(), right_chunk.is_empty()) {
                (true, true) => return Ok(true),
                (true, false) | (false, true) => return Ok(false),
                (false, false) => {}
            }

            let len = left_chunk.len().min(right_chunk.len());
            if left_chunk[..len] != right_chunk[..len] {
                return Ok(false);
            }

            left_reader.consume(len);
            right_reader.consume(len);
        }
    }
}
