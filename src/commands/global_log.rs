use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::commits_by_recency;
use std::io::Write;

impl Repository {
    /// Print every commit in the object store, most recent first.
    ///
    /// Unlike `log` this ignores refs entirely, so commits orphaned by
    /// `reset` or `rm-branch` are still listed.
    pub fn global_log(&self) -> anyhow::Result<()> {
        for commit in commits_by_recency(self)? {
            writeln!(self.writer(), "{}", commit.log_entry())?;
        }

        Ok(())
    }
}
