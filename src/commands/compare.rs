use crate::areas::session::Session;
use crate::artifacts::classify::classification::ClassificationRecord;
use crate::artifacts::classify::comparator::Comparator;
use crate::errors::DiffError;
use anyhow::Context;
use std::io::Write;
use tracing::debug;

impl Session {
    /// Snapshots both directories and classifies every file name.
    pub fn records(&self) -> Result<Vec<ClassificationRecord>, DiffError> {
        let filter = self.options().name_filter();

        let baseline = self.baseline().snapshot(&filter)?;
        let candidate = self.candidate().snapshot(&filter)?;

        let strategy = self.options().mode.strategy();
        debug!(strategy = strategy.name(), "comparing snapshots");

        Comparator::new(&*strategy).compare(&baseline, &candidate)
    }

    /// Writes one `<status>\t<name>` line per difference.
    ///
    /// Nothing is written unless the whole comparison succeeds.
    pub fn compare(&self) -> anyhow::Result<()> {
        let records = self.records()?;

        let mut writer = self.writer();
        for record in &records {
            let line = if self.color() {
                record.colored_line()
            } else {
                record.to_string()
            };
            writeln!(writer, "{}", line).context("Failed to write comparison report")?;
        }
        writer.flush()?;

        Ok(())
    }
}
