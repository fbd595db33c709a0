//! Whole-tree checkout
//!
//! Branch checkout, `reset` and fast-forward merges replace the entire top
//! level of the working tree with a target commit's tracked snapshot. The
//! untracked-overwrite check runs before any mutation, so a refused
//! migration leaves the repository untouched.

use crate::areas::index::StagingArea;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::status::report::worktree_snapshot;
use crate::errors::GitletError;
use anyhow::bail;
use derive_new::new;

/// Replaces the working tree with a target commit's snapshot
#[derive(new)]
pub struct Migration<'r> {
    repository: &'r Repository,
    target: &'r Commit,
}

impl Migration<'_> {
    /// Refuse the migration when it would clobber an untracked file
    ///
    /// Untracked means on disk but absent from the effective tracked set.
    /// Such a path passes only when the target commit tracks it with
    /// exactly the bytes currently on disk; a path the target does not
    /// track fails too, since applying the snapshot would delete it.
    pub fn check_untracked(&self, staging: &StagingArea) -> anyhow::Result<()> {
        let on_disk = worktree_snapshot(self.repository.workspace())?;
        let effective_tracked = staging.effective_tracked();

        for (path, disk_id) in &on_disk {
            if effective_tracked.contains_key(path) {
                continue;
            }
            match self.target.tracked().get(path) {
                Some(target_id) if target_id == disk_id => {}
                _ => bail!(GitletError::UntrackedOverwrite),
            }
        }

        Ok(())
    }

    /// Replace the working tree with the target snapshot
    ///
    /// The staging area is cleared and persisted first, then every
    /// top-level file is removed before the target's blobs are written out.
    pub fn apply(&self, staging: &mut StagingArea) -> anyhow::Result<()> {
        staging.clear();
        staging.save()?;

        let workspace = self.repository.workspace();
        for path in workspace.list_files()? {
            workspace.remove_file(&path)?;
        }

        for (path, blob_id) in self.target.tracked() {
            let blob = self.repository.load_blob(blob_id)?;
            workspace.write_file(path, blob.content())?;
        }

        Ok(())
    }
}
