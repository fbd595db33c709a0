use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit::Commit;
use crate::errors::GitletError;
use anyhow::{Context, bail};

impl Repository {
    /// `checkout -- <file>`: restore a file to its HEAD version.
    pub fn checkout_file(&self, file_name: &str) -> anyhow::Result<()> {
        let head_commit = self.head_commit()?;

        self.restore_tracked_file(&head_commit, file_name)
    }

    /// `checkout <commit id> -- <file>`: restore a file to the version in
    /// the given commit. Short ids of at least four characters are accepted.
    pub fn checkout_file_from_commit(
        &self,
        commit_id: &str,
        file_name: &str,
    ) -> anyhow::Result<()> {
        let commit_id = self.database().resolve_commit_id(commit_id)?;
        let commit = self.load_commit(&commit_id)?;

        self.restore_tracked_file(&commit, file_name)
    }

    /// `checkout <branch>`: replace the working tree with the branch tip's
    /// snapshot and point HEAD at the branch.
    pub fn checkout_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        if !self.refs().branch_exists(branch_name) {
            bail!(GitletError::CheckoutNoSuchBranch);
        }
        if self.refs().is_current_branch(branch_name)? {
            bail!(GitletError::CheckoutCurrentBranch);
        }

        let target_commit_id = self
            .refs()
            .read_branch(branch_name)?
            .with_context(|| format!("Branch {branch_name} has no tip commit"))?;
        let target_commit = self.load_commit(&target_commit_id)?;

        let mut staging = self.load_staging_area()?;
        let migration = Migration::new(self, &target_commit);
        migration.check_untracked(&staging)?;
        migration.apply(&mut staging)?;

        self.refs().set_head(branch_name)?;

        Ok(())
    }

    fn restore_tracked_file(&self, commit: &Commit, file_name: &str) -> anyhow::Result<()> {
        let path = self.workspace().resolve_path(file_name);
        let path_string = Workspace::path_string(&path);

        let Some(blob_id) = commit.tracked().get(&path_string) else {
            bail!(GitletError::FileNotInCommit);
        };
        let blob = self.load_blob(blob_id)?;
        self.workspace().write_file(&path, blob.content())?;

        Ok(())
    }
}
