use crate::areas::index::StagingArea;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::bail;

impl Repository {
    /// Record the staged snapshot as a new commit on the current branch.
    pub fn commit(&self, message: &str) -> anyhow::Result<()> {
        if message.is_empty() {
            bail!(GitletError::EmptyMessage);
        }

        let mut staging = self.load_staging_area()?;
        self.commit_with_parents(message, None, &mut staging)
    }

    /// Shared tail of `commit` and `merge`; a merge passes the target branch
    /// tip as the second parent and a staging area it already populated.
    pub(crate) fn commit_with_parents(
        &self,
        message: &str,
        second_parent: Option<ObjectId>,
        staging: &mut StagingArea,
    ) -> anyhow::Result<()> {
        if staging.is_clean() {
            bail!(GitletError::NothingToCommit);
        }

        let tracked = staging.commit_snapshot();
        staging.save()?;

        let mut parents = vec![self.refs().head_commit_id()?];
        parents.extend(second_parent);

        let commit = Commit::new(message.to_string(), parents, tracked);
        self.database().store(&commit)?;
        self.refs()
            .set_branch(&self.refs().current_branch()?, &commit.object_id())?;

        Ok(())
    }
}
