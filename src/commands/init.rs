use crate::areas::repository::{DEFAULT_BRANCH_NAME, Repository};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::errors::GitletError;
use anyhow::{Context, bail};
use std::fs;

impl Repository {
    /// Create the `.gitlet` layout with a deterministic initial commit on
    /// the default branch.
    pub fn init(&self) -> anyhow::Result<()> {
        if self.is_initialized() {
            bail!(GitletError::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create the objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create the branch heads directory")?;

        let initial_commit = Commit::initial();
        self.database().store(&initial_commit)?;

        self.refs().set_head(DEFAULT_BRANCH_NAME)?;
        self.refs()
            .set_branch(DEFAULT_BRANCH_NAME, &initial_commit.object_id())?;

        Ok(())
    }
}
