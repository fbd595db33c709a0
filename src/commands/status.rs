use crate::areas::repository::Repository;
use crate::artifacts::status::report::Status;
use std::io::Write;

impl Repository {
    /// Print the five-section report of branches, staged changes and the
    /// working tree.
    pub fn status(&self) -> anyhow::Result<()> {
        let staging = self.load_staging_area()?;
        let report = Status::new(self, &staging).report()?;

        write!(self.writer(), "{report}")?;

        Ok(())
    }
}
