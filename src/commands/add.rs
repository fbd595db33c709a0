use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::errors::GitletError;
use anyhow::bail;

impl Repository {
    /// Stage a working file for addition.
    ///
    /// Staging a file whose content matches its HEAD version instead cancels
    /// any pending stage or removal for it. The index is only rewritten when
    /// the staging area actually changed.
    pub fn add(&self, file_name: &str) -> anyhow::Result<()> {
        let path = self.workspace().resolve_path(file_name);
        if !self.workspace().file_exists(&path) {
            bail!(GitletError::FileDoesNotExist);
        }

        let blob = self.workspace().parse_blob(&path)?;
        let mut staging = self.load_staging_area()?;

        if staging.stage(Workspace::path_string(&path), blob, self.database())? {
            staging.save()?;
        }

        Ok(())
    }
}
