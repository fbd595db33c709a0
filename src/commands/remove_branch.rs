use crate::areas::repository::Repository;

impl Repository {
    /// Delete a branch pointer. Commits it referenced stay in the store and
    /// remain visible to `global-log`.
    pub fn remove_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        self.refs().delete_branch(branch_name)
    }
}
