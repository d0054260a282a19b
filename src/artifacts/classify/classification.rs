use colored::{ColoredString, Colorize};
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Modified,
    Deleted,
    Added,
}

impl From<&ChangeType> for &str {
    fn from(change: &ChangeType) -> Self {
        match change {
            ChangeType::Modified => "M",
            ChangeType::Deleted => "D",
            ChangeType::Added => "A",
        }
    }
}

impl ChangeType {
    fn colored(&self) -> ColoredString {
        let label: &str = self.into();
        match self {
            ChangeType::Modified => label.yellow(),
            ChangeType::Deleted => label.red(),
            ChangeType::Added => label.green(),
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label: &str = self.into();
        write!(f, "{}", label)
    }
}

/// One reported difference; unchanged files never produce a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct ClassificationRecord {
    pub change: ChangeType,
    pub name: String,
}

impl ClassificationRecord {
    /// The report line with a coloured status letter.
    pub fn colored_line(&self) -> String {
        format!("{}\t{}", self.change.colored(), self.name)
    }
}

impl std::fmt::Display for ClassificationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}", self.change, self.name)
    }
}
