use crate::areas::repository::Repository;

impl Repository {
    /// Create a branch pointing at the current HEAD commit.
    ///
    /// The new branch is not checked out.
    pub fn branch(&self, branch_name: &str) -> anyhow::Result<()> {
        let head_commit_id = self.refs().head_commit_id()?;

        self.refs().create_branch(branch_name, &head_commit_id)
    }
}
