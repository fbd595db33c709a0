use crate::areas::database::Database;
use crate::areas::index::StagingArea;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Name of the repository metadata directory
pub const GITLET_DIR_NAME: &str = ".gitlet";

/// Name of the default branch created by `init`
pub const DEFAULT_BRANCH_NAME: &str = "master";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let gitlet_path = path.join(GITLET_DIR_NAME);

        let database = Database::new(gitlet_path.join("objects").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(gitlet_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn gitlet_path(&self) -> PathBuf {
        self.path.join(GITLET_DIR_NAME)
    }

    pub fn index_path(&self) -> PathBuf {
        self.gitlet_path().join("index")
    }

    pub fn writer(&'_ self) -> std::cell::RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn is_initialized(&self) -> bool {
        self.gitlet_path().is_dir()
    }

    /// Every command except `init` refuses to run outside a repository.
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.is_initialized() {
            anyhow::bail!(GitletError::NotInitialized);
        }

        Ok(())
    }

    pub fn head_commit(&self) -> anyhow::Result<Commit> {
        let head_commit_id = self.refs.head_commit_id()?;

        self.load_commit(&head_commit_id)
    }

    pub fn load_commit(&self, commit_id: &ObjectId) -> anyhow::Result<Commit> {
        self.database
            .parse_object_as_commit(commit_id)?
            .with_context(|| format!("Object {commit_id} is not a commit"))
    }

    pub fn load_blob(&self, blob_id: &ObjectId) -> anyhow::Result<Blob> {
        self.database
            .parse_object_as_blob(blob_id)?
            .with_context(|| format!("Object {blob_id} is not a blob"))
    }

    /// Load the staging area with its tracked snapshot refreshed from HEAD.
    pub fn load_staging_area(&self) -> anyhow::Result<StagingArea> {
        let head_tracked = self.head_commit()?.into_tracked();

        StagingArea::load_or_new(self.index_path().into_boxed_path(), head_tracked)
    }
}
