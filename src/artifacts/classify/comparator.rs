use crate::artifacts::classify::classification::{ChangeType, ClassificationRecord};
use crate::artifacts::equality::FileEquality;
use crate::artifacts::snapshot::DirectorySnapshot;
use crate::artifacts::snapshot::file_descriptor::FileDescriptor;
use crate::errors::DiffError;
use derive_new::new;

#[derive(new)]
pub struct Comparator<'s> {
    strategy: &'s dyn FileEquality,
}

impl<'s> Comparator<'s> {
    pub fn classify(
        &self,
        baseline: Option<&FileDescriptor>,
        candidate: Option<&FileDescriptor>,
    ) -> Result<Option<ChangeType>, DiffError> {
        match (baseline, candidate) {
            (Some(base), Some(cand)) if !self.strategy.equals(base, cand)? => {
                Ok(Some(ChangeType::Modified))
            }
            (Some(_), None) => Ok(Some(ChangeType::Deleted)),
            (None, Some(_)) => Ok(Some(ChangeType::Added)),
            _ => Ok(None),
        }
    }

    /// Classifies every name in either snapshot.
    ///
    /// Modified and deleted records come first in baseline key order, followed
    /// by added records in candidate key order. The first content read failure
    /// aborts the comparison.
    pub fn compare(
        &self,
        baseline: &DirectorySnapshot,
        candidate: &DirectorySnapshot,
    ) -> Result<Vec<ClassificationRecord>, DiffError> {
        let mut records = Vec::new();

        for (key, base) in baseline {
            if let Some(change) = self.classify(Some(base), candidate.get(key))? {
                records.push(ClassificationRecord::new(change, base.name.clone()));
            }
        }

        for (_, cand) in candidate
            .iter()
            .filter(|(key, _)| !baseline.contains_key(key))
        {
            if let Some(change) = self.classify(None, Some(cand))? {
                records.push(ClassificationRecord::new(change, cand.name.clone()));
            }
        }

        Ok(records)
    }
}
