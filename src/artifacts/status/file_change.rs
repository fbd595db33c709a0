use std::fmt;

/// Unstaged difference between a tracked file and its working-tree copy
///
/// "Tracked" here means the effective tracked set: HEAD's snapshot overlaid
/// with staged additions, minus staged removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FileChange {
    /// Present on disk with content differing from the tracked blob
    Modified,
    /// Tracked but no longer present on disk
    Deleted,
}

impl From<&FileChange> for &str {
    fn from(change: &FileChange) -> Self {
        match change {
            FileChange::Modified => "modified",
            FileChange::Deleted => "deleted",
        }
    }
}

impl fmt::Display for FileChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label: &str = self.into();
        write!(f, "{label}")
    }
}
