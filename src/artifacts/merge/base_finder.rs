//! Merge base lookup
//!
//! The merge base of two commits is their latest common ancestor. Both
//! histories are walked breadth-first with every parent enqueued in order;
//! the result is the first commit of the source walk that the target side
//! also reaches. When several ancestors qualify (criss-cross histories),
//! the source walk order decides, keeping the choice deterministic.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Debug logging for the merge-base search, enabled with the
/// `debug_merge` feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Finds the latest common ancestor of two commits
///
/// Generic over the parent lookup so the walk can run against the object
/// store or an in-memory graph in tests.
pub struct MergeBaseFinder<ParentsFn>
where
    ParentsFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    parents: ParentsFn,
}

impl<ParentsFn> MergeBaseFinder<ParentsFn>
where
    ParentsFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents: ParentsFn) -> Self {
        Self { parents }
    }

    /// Latest common ancestor of `source` and `target`
    ///
    /// `None` only when the commits share no history at all, which cannot
    /// happen in a repository grown from a single `init`.
    pub fn find_merge_base(
        &self,
        source_commit_id: &ObjectId,
        target_commit_id: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let source_order = self.breadth_first_order(source_commit_id)?;
        let target_reachable = self
            .breadth_first_order(target_commit_id)?
            .into_iter()
            .collect::<HashSet<_>>();

        debug_log!(
            "Source walk order: {}",
            source_order
                .iter()
                .map(|oid| oid.to_short_oid())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(source_order
            .into_iter()
            .find(|commit_id| target_reachable.contains(commit_id)))
    }

    /// Commit ids reachable from `start`, in breadth-first order
    ///
    /// Duplicates queued through multiple children are dropped when polled,
    /// so each id appears once.
    fn breadth_first_order(&self, start_commit_id: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
        let mut queue = VecDeque::from([start_commit_id.clone()]);
        let mut order = Vec::new();
        let mut visited = HashSet::new();

        while let Some(commit_id) = queue.pop_front() {
            if !visited.insert(commit_id.clone()) {
                continue;
            }

            for parent_id in (self.parents)(&commit_id)? {
                queue.push_back(parent_id);
            }
            order.push(commit_id);
        }

        Ok(order)
    }
}
