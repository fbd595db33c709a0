//! Three-way merge resolution
//!
//! Walks the base, current and target snapshots and applies each path's
//! outcome directly to the working tree and staging area: clean takes are
//! written and staged, conflicting paths get conflict markers, and paths
//! deleted on the target side are unstaged. Merging never happens below
//! file granularity.

use crate::areas::index::StagingArea;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;
use std::path::Path;

/// Applies per-path merge outcomes to the working tree and staging area
#[derive(new)]
pub struct MergeResolution<'r> {
    repository: &'r Repository,
    staging: &'r mut StagingArea,
}

impl MergeResolution<'_> {
    /// Resolve every path of the three snapshots, returning whether any
    /// path conflicted
    ///
    /// Paths tracked by the base are classified against both sides first;
    /// paths the base never saw are classified by whether the sides agree.
    /// Every write goes to the working tree and is staged back from disk.
    pub fn resolve(
        &mut self,
        base: &Commit,
        current: &Commit,
        target: &Commit,
    ) -> anyhow::Result<bool> {
        let mut current_tracked = current.tracked().clone();
        let mut target_tracked = target.tracked().clone();
        let mut has_conflict = false;

        for (path, base_id) in base.tracked() {
            let current_id = current_tracked.remove(path);
            let target_id = target_tracked.remove(path);

            match (current_id, target_id) {
                // Unchanged here, modified there: take the target version.
                (Some(current_id), Some(target_id))
                    if current_id == *base_id && target_id != *base_id =>
                {
                    self.take_target(path, &target_id)?;
                }
                // Modified on both sides in different ways.
                (Some(current_id), Some(target_id))
                    if current_id != *base_id
                        && target_id != *base_id
                        && current_id != target_id =>
                {
                    has_conflict = true;
                    self.write_conflict(path, Some(&current_id), Some(&target_id))?;
                }
                // Deleted here, modified there.
                (None, Some(target_id)) if target_id != *base_id => {
                    has_conflict = true;
                    self.write_conflict(path, None, Some(&target_id))?;
                }
                // Unchanged here, deleted there: drop the file.
                (Some(current_id), None) if current_id == *base_id => {
                    self.staging.unstage(path, self.repository.workspace())?;
                }
                // Modified here, deleted there.
                (Some(current_id), None) if current_id != *base_id => {
                    has_conflict = true;
                    self.write_conflict(path, Some(&current_id), None)?;
                }
                // Everything else keeps the current side as it stands.
                _ => {}
            }
        }

        for (path, target_id) in &target_tracked {
            match current_tracked.get(path) {
                // Added on both sides with different content.
                Some(current_id) if current_id != target_id => {
                    has_conflict = true;
                    self.write_conflict(path, Some(current_id), Some(target_id))?;
                }
                // Added identically on both sides.
                Some(_) => {}
                // Only the target side knows the path.
                None => self.take_target(path, target_id)?,
            }
        }

        Ok(has_conflict)
    }

    /// Write the target blob's content to the working tree and stage it
    fn take_target(&mut self, path: &str, blob_id: &ObjectId) -> anyhow::Result<()> {
        let blob = self.repository.load_blob(blob_id)?;
        self.repository.workspace().write_file(path, blob.content())?;

        self.stage_from_disk(path)
    }

    fn write_conflict(
        &mut self,
        path: &str,
        current_id: Option<&ObjectId>,
        target_id: Option<&ObjectId>,
    ) -> anyhow::Result<()> {
        let current_content = self.load_content(current_id)?;
        let target_content = self.load_content(target_id)?;
        let content = conflict_content(current_content.as_ref(), target_content.as_ref());

        self.repository.workspace().write_file(path, &content)?;

        self.stage_from_disk(path)
    }

    fn load_content(&self, blob_id: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        blob_id
            .map(|id| Ok(self.repository.load_blob(id)?.content().clone()))
            .transpose()
    }

    fn stage_from_disk(&mut self, path: &str) -> anyhow::Result<()> {
        let blob = self.repository.workspace().parse_blob(Path::new(path))?;
        self.staging
            .stage(path.to_string(), blob, self.repository.database())?;

        Ok(())
    }
}

/// Conflict marker content for a path the merge could not resolve
///
/// Either side may be absent (deleted in that branch) and contributes
/// nothing between its markers, as does a side whose content is empty. A
/// non-empty side is written verbatim with a newline appended when its
/// content does not already end with one. No newline follows the closing
/// marker.
pub fn conflict_content(current: Option<&Bytes>, target: Option<&Bytes>) -> Bytes {
    let mut content = Vec::new();

    content.extend_from_slice(b"<<<<<<< HEAD\n");
    append_side(&mut content, current);
    content.extend_from_slice(b"=======\n");
    append_side(&mut content, target);
    content.extend_from_slice(b">>>>>>>");

    Bytes::from(content)
}

fn append_side(content: &mut Vec<u8>, side: Option<&Bytes>) {
    if let Some(side) = side
        && !side.is_empty()
    {
        content.extend_from_slice(side);
        if !side.ends_with(b"\n") {
            content.push(b'\n');
        }
    }
}
