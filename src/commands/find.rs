use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::commits_by_recency;
use crate::artifacts::objects::object::Object;
use crate::errors::GitletError;
use anyhow::bail;
use std::io::Write;

impl Repository {
    /// Print the ids of every commit whose message matches exactly, one per
    /// line, most recent commit first.
    pub fn find(&self, message: &str) -> anyhow::Result<()> {
        let matching_ids = commits_by_recency(self)?
            .into_iter()
            .filter(|commit| commit.message() == message)
            .map(|commit| commit.object_id())
            .collect::<Vec<_>>();

        if matching_ids.is_empty() {
            bail!(GitletError::NoCommitWithMessage);
        }
        for commit_id in matching_ids {
            writeln!(self.writer(), "{commit_id}")?;
        }

        Ok(())
    }
}
