//! The five-section `status` report
//!
//! Section order and layout are fixed: branches, staged files, removed files,
//! unstaged modifications, untracked files. Each section lists file names
//! (not full paths) sorted by absolute path and is terminated by a blank line.

use crate::areas::index::StagingArea;
use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use derive_new::new;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Builds a [`StatusReport`] from the current repository state
#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
    staging: &'r StagingArea,
}

impl Status<'_> {
    /// Classify every effective-tracked path against the working tree
    ///
    /// A tracked path whose on-disk content hashes to a different id is
    /// modified; a tracked path missing from disk is deleted. Disk files
    /// left unvisited after the pass are the untracked set.
    pub fn report(&self) -> anyhow::Result<StatusReport> {
        let refs = self.repository.refs();
        let current_branch = refs.current_branch()?;
        let other_branches = refs
            .list_branches()?
            .into_iter()
            .filter(|branch| *branch != current_branch)
            .collect();

        let mut on_disk = worktree_snapshot(self.repository.workspace())?;
        let mut changes = Vec::new();
        for (path, tracked_id) in self.staging.effective_tracked() {
            match on_disk.remove(&path) {
                Some(disk_id) if disk_id == tracked_id => {}
                Some(_) => changes.push((path, FileChange::Modified)),
                None => changes.push((path, FileChange::Deleted)),
            }
        }

        Ok(StatusReport {
            current_branch,
            other_branches,
            staged: self.staging.added().keys().cloned().collect(),
            removed: self.staging.removed().iter().cloned().collect(),
            changes,
            untracked: on_disk.into_keys().collect(),
        })
    }
}

/// Snapshot of the repository state as printed by `status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    current_branch: String,
    other_branches: Vec<String>,
    staged: Vec<String>,
    removed: Vec<String>,
    changes: Vec<(String, FileChange)>,
    untracked: Vec<String>,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Branches ===")?;
        writeln!(f, "*{}", self.current_branch)?;
        for branch in &self.other_branches {
            writeln!(f, "{branch}")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Staged Files ===")?;
        for path in &self.staged {
            writeln!(f, "{}", file_name(path))?;
        }
        writeln!(f)?;

        writeln!(f, "=== Removed Files ===")?;
        for path in &self.removed {
            writeln!(f, "{}", file_name(path))?;
        }
        writeln!(f)?;

        writeln!(f, "=== Modifications Not Staged For Commit ===")?;
        for (path, change) in &self.changes {
            writeln!(f, "{} ({change})", file_name(path))?;
        }
        writeln!(f)?;

        writeln!(f, "=== Untracked Files ===")?;
        for path in &self.untracked {
            writeln!(f, "{}", file_name(path))?;
        }
        writeln!(f)
    }
}

/// Map every top-level working-tree file to the id its current content
/// hashes to
pub(crate) fn worktree_snapshot(
    workspace: &Workspace,
) -> anyhow::Result<BTreeMap<String, ObjectId>> {
    let mut snapshot = BTreeMap::new();

    for path in workspace.list_files()? {
        let blob = workspace.parse_blob(&path)?;
        snapshot.insert(Workspace::path_string(&path), blob.object_id());
    }

    Ok(snapshot)
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
