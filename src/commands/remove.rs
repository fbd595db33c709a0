use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::errors::GitletError;
use anyhow::bail;

impl Repository {
    /// Unstage a file, or stage it for removal when HEAD tracks it.
    ///
    /// A file tracked by HEAD is also deleted from the working tree; one that
    /// was merely staged keeps its working copy.
    pub fn remove(&self, file_name: &str) -> anyhow::Result<()> {
        let path = self.workspace().resolve_path(file_name);
        let path_string = Workspace::path_string(&path);

        let mut staging = self.load_staging_area()?;
        if !staging.unstage(&path_string, self.workspace())? {
            bail!(GitletError::NoReasonToRemove);
        }
        staging.save()?;

        Ok(())
    }
}
