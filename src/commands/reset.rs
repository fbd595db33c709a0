use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;

impl Repository {
    /// Restore a commit's snapshot and retarget the current branch at it.
    ///
    /// HEAD still names the same branch afterwards; only the branch pointer
    /// moves. Short ids are accepted like in `checkout`.
    pub fn reset(&self, commit_id: &str) -> anyhow::Result<()> {
        let commit_id = self.database().resolve_commit_id(commit_id)?;
        let target_commit = self.load_commit(&commit_id)?;

        let mut staging = self.load_staging_area()?;
        let migration = Migration::new(self, &target_commit);
        migration.check_untracked(&staging)?;
        migration.apply(&mut staging)?;

        self.refs()
            .set_branch(&self.refs().current_branch()?, &commit_id)?;

        Ok(())
    }
}
