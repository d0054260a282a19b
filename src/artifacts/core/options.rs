use crate::artifacts::equality::CompareMode;
use crate::artifacts::snapshot::name_filter::{CaseFolding, NameFilter};
use derive_new::new;

pub const DEFAULT_PATTERN: &str = "*";

/// Settings applied identically to both scanned directories.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub pattern: String,
    pub mode: CompareMode,
    pub case_folding: CaseFolding,
}

impl DiffOptions {
    pub fn name_filter(&self) -> NameFilter {
        NameFilter::new(&self.pattern, self.case_folding)
    }
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            pattern: DEFAULT_PATTERN.to_string(),
            mode: CompareMode::default(),
            case_folding: CaseFolding::default(),
        }
    }
}
