use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::cmp::Ordering;

/// First-parent walk from a starting commit
///
/// `log` follows only each commit's first parent, so the second line of a
/// merge never appears. The walk ends after yielding the parentless initial
/// commit.
#[derive(Clone, new)]
pub struct RevList<'r> {
    repository: &'r Repository,
    start_commit_id: ObjectId,
}

impl<'r> RevList<'r> {
    pub fn into_iter(self) -> RevListIntoIter<'r> {
        RevListIntoIter {
            repository: self.repository,
            current_commit_id: Some(self.start_commit_id),
        }
    }
}

pub struct RevListIntoIter<'r> {
    repository: &'r Repository,
    current_commit_id: Option<ObjectId>,
}

impl Iterator for RevListIntoIter<'_> {
    type Item = anyhow::Result<Commit>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_id = self.current_commit_id.take()?;

        match self.repository.load_commit(&commit_id) {
            Ok(commit) => {
                self.current_commit_id = commit.first_parent().cloned();
                Some(Ok(commit))
            }
            Err(error) => Some(Err(error)),
        }
    }
}

/// Every commit object in the store, most recent first
///
/// Enumerates the object store instead of walking refs, so commits left
/// orphaned by `reset` or `rm-branch` still show up. Timestamp ties are
/// broken by id to keep the order stable across runs.
pub fn commits_by_recency(repository: &Repository) -> anyhow::Result<Vec<Commit>> {
    let mut commits = repository
        .database()
        .commit_object_ids()?
        .iter()
        .map(|commit_id| repository.load_commit(commit_id))
        .collect::<anyhow::Result<Vec<_>>>()?;

    commits.sort_by(recency_order);

    Ok(commits)
}

fn recency_order(a: &Commit, b: &Commit) -> Ordering {
    b.timestamp()
        .cmp(&a.timestamp())
        .then_with(|| a.object_id().cmp(&b.object_id()))
}
