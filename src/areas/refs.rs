//! Branch references and HEAD.
//!
//! HEAD is always a symbolic reference of the form `ref: refs/heads/<name>`;
//! the engine never detaches it. Branch files under `refs/heads` hold the
//! forty-character id of the branch tip, with no trailing newline.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::GitletError;
use anyhow::Context;
use derive_new::new;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing the symbolic HEAD reference
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Reference manager over the `.gitlet` directory.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository metadata directory (typically `.gitlet`)
    path: Box<Path>,
}

impl Refs {
    /// Name of the branch whose tip HEAD currently designates.
    pub fn current_branch(&self) -> anyhow::Result<String> {
        let head_content = std::fs::read_to_string(self.head_path())
            .with_context(|| format!("failed to read HEAD at {:?}", self.head_path()))?;

        parse_symbolic_ref(head_content.trim())
            .with_context(|| format!("HEAD is not a symbolic reference: {head_content:?}"))
    }

    pub fn is_current_branch(&self, branch_name: &str) -> anyhow::Result<bool> {
        Ok(self.current_branch()? == branch_name)
    }

    /// Point HEAD at the given branch. The branch file itself is untouched.
    pub fn set_head(&self, branch_name: &str) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), format_symbolic_ref(branch_name))
    }

    /// Id of the commit the current branch points to.
    pub fn head_commit_id(&self) -> anyhow::Result<ObjectId> {
        let branch_name = self.current_branch()?;

        self.read_branch(&branch_name)?
            .with_context(|| format!("HEAD points to a missing branch {branch_name:?}"))
    }

    pub fn branch_exists(&self, branch_name: &str) -> bool {
        self.heads_path().join(branch_name).exists()
    }

    pub fn read_branch(&self, branch_name: &str) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.heads_path().join(branch_name);

        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read branch file at {branch_path:?}"))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    /// Move a branch tip, creating the branch file if it does not exist yet.
    pub fn set_branch(&self, branch_name: &str, commit_id: &ObjectId) -> anyhow::Result<()> {
        let branch_path = self.heads_path().join(branch_name).into_boxed_path();

        self.update_ref_file(branch_path, commit_id.as_ref().to_string())
    }

    /// Create a new branch pointing at the given commit.
    pub fn create_branch(&self, branch_name: &str, commit_id: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(branch_name) {
            anyhow::bail!(GitletError::BranchExists);
        }

        self.set_branch(branch_name, commit_id)
    }

    /// Delete a branch file. The commits it pointed to stay in the object
    /// store untouched.
    pub fn delete_branch(&self, branch_name: &str) -> anyhow::Result<()> {
        if !self.branch_exists(branch_name) {
            anyhow::bail!(GitletError::NoSuchBranch);
        }

        if self.is_current_branch(branch_name)? {
            anyhow::bail!(GitletError::CannotRemoveCurrent);
        }

        let branch_path = self.heads_path().join(branch_name);
        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {branch_path:?}"))
    }

    /// All branch names in ascending order.
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let heads_path = self.heads_path();

        let mut branch_names = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                if entry.path().is_file() {
                    let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                    Some(relative_path.to_string_lossy().to_string())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        branch_names.sort();

        Ok(branch_names)
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        // open the ref file as WRONLY and CREAT to overwrite it whole
        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.clone())
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        ref_file.write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}

fn format_symbolic_ref(branch_name: &str) -> String {
    format!("ref: refs/heads/{branch_name}")
}

fn parse_symbolic_ref(content: &str) -> Option<String> {
    let captures = regex::Regex::new(SYMREF_REGEX).ok()?.captures(content)?;

    Some(captures[1].to_string())
}
