//! Directory snapshots
//!
//! A snapshot maps a normalized file name to the `FileDescriptor` captured for
//! it. Keys are unique: when case folding maps two names onto the same key, the
//! last one inserted wins.
//!
//! - `file_descriptor`: One scanned file (size, path, original name)
//! - `name_filter`: Case folding policy and glob filtering

pub mod file_descriptor;
pub mod name_filter;

use file_descriptor::FileDescriptor;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySnapshot {
    entries: BTreeMap<String, FileDescriptor>,
}

impl DirectorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor, returning the one it replaced under the same key.
    pub fn insert(&mut self, key: String, descriptor: FileDescriptor) -> Option<FileDescriptor> {
        self.entries.insert(key, descriptor)
    }

    pub fn get(&self, key: &str) -> Option<&FileDescriptor> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn iter(&self) -> Iter<'_, String, FileDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'s> IntoIterator for &'s DirectorySnapshot {
    type Item = (&'s String, &'s FileDescriptor);
    type IntoIter = Iter<'s, String, FileDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, FileDescriptor)> for DirectorySnapshot {
    fn from_iter<T: IntoIterator<Item = (String, FileDescriptor)>>(iter: T) -> Self {
        DirectorySnapshot {
            entries: iter.into_iter().collect(),
        }
    }
}
