use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use std::io::Write;

impl Repository {
    /// Print the first-parent history of HEAD, most recent commit first.
    pub fn log(&self) -> anyhow::Result<()> {
        let head_commit_id = self.refs().head_commit_id()?;

        for commit in RevList::new(self, head_commit_id).into_iter() {
            writeln!(self.writer(), "{}", commit?.log_entry())?;
        }

        Ok(())
    }
}
