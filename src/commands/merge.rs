use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::base_finder::MergeBaseFinder;
use crate::artifacts::merge::resolution::MergeResolution;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::{Context, bail};
use std::io::Write;

impl Repository {
    /// Merge the target branch into the current one.
    ///
    /// After the preflight checks the merge either stops with a notice (the
    /// target is an ancestor, or the current branch fast-forwards) or builds
    /// a merge commit with the current tip as first parent and the target
    /// tip as second. Conflicting paths are written with conflict markers,
    /// staged, and reported after the commit.
    pub fn merge(&self, target_branch_name: &str) -> anyhow::Result<()> {
        if !self.refs().branch_exists(target_branch_name) {
            bail!(GitletError::NoSuchBranch);
        }
        if self.refs().is_current_branch(target_branch_name)? {
            bail!(GitletError::MergeWithSelf);
        }

        let mut staging = self.load_staging_area()?;
        if !staging.is_clean() {
            bail!(GitletError::UncommittedChanges);
        }

        let target_commit_id = self
            .refs()
            .read_branch(target_branch_name)?
            .with_context(|| format!("Branch {target_branch_name} has no tip commit"))?;
        let target_commit = self.load_commit(&target_commit_id)?;

        let migration = Migration::new(self, &target_commit);
        migration.check_untracked(&staging)?;

        let head_commit_id = self.refs().head_commit_id()?;
        let finder = MergeBaseFinder::new(|commit_id: &ObjectId| {
            Ok(self.load_commit(commit_id)?.parents().to_vec())
        });
        let base_commit_id = finder
            .find_merge_base(&head_commit_id, &target_commit_id)?
            .context("Branches share no common ancestor")?;

        if base_commit_id == target_commit_id {
            bail!(GitletError::GivenIsAncestor);
        }
        if base_commit_id == head_commit_id {
            migration.apply(&mut staging)?;
            self.refs()
                .set_branch(&self.refs().current_branch()?, &target_commit_id)?;
            bail!(GitletError::FastForwarded);
        }

        let base_commit = self.load_commit(&base_commit_id)?;
        let head_commit = self.load_commit(&head_commit_id)?;
        let found_conflict = MergeResolution::new(self, &mut staging).resolve(
            &base_commit,
            &head_commit,
            &target_commit,
        )?;

        let message = format!(
            "Merged {target_branch_name} into {}.",
            self.refs().current_branch()?
        );
        self.commit_with_parents(&message, Some(target_commit_id), &mut staging)?;

        if found_conflict {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(())
    }
}
