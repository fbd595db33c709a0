//! Engine error vocabulary
//!
//! [`GitletError`] is the single user-visible failure type of the engine. Every
//! variant renders to the exact message the command prints before exiting, so
//! the strings here are contractual. Internal I/O failures travel as plain
//! `anyhow` errors instead and are never shown through this enum.

use thiserror::Error;

/// User-visible outcomes that terminate a command with a fixed message.
///
/// Most variants are refusals (bad operands, missing branch, dirty index).
/// `FastForwarded` and `GivenIsAncestor` are notices: merge stops early after
/// them, but the repository is in a valid state. All of them exit with code 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitletError {
    #[error("Please enter a command.")]
    NoCommand,
    #[error("No command with that name exists.")]
    BadCommand,
    #[error("Incorrect operands.")]
    BadOperands,
    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,
    #[error("File does not exist.")]
    FileDoesNotExist,
    #[error("Please enter a commit message.")]
    EmptyMessage,
    #[error("No changes added to the commit.")]
    NothingToCommit,
    #[error("No reason to remove the file.")]
    NoReasonToRemove,
    #[error("File does not exist in that commit.")]
    FileNotInCommit,
    #[error("No commit with that id exists.")]
    NoSuchCommit,
    #[error("Commit id should contain at least 4 characters.")]
    ShortIdTooShort,
    #[error("More than 1 commit has the same id prefix.")]
    AmbiguousId,
    #[error("A branch with that name does not exist.")]
    NoSuchBranch,
    /// Same condition as [`NoSuchBranch`](Self::NoSuchBranch), but `checkout`
    /// historically words it differently.
    #[error("No such branch exists.")]
    CheckoutNoSuchBranch,
    #[error("A branch with that name already exists.")]
    BranchExists,
    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrent,
    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,
    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,
    #[error("You have uncommitted changes.")]
    UncommittedChanges,
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedOverwrite,
    #[error("Given branch is an ancestor of the current branch.")]
    GivenIsAncestor,
    /// Notice emitted when merge resolves as a fast-forward.
    #[error("Current branch fast-forwarded.")]
    FastForwarded,
    #[error("Found no commit with that message.")]
    NoCommitWithMessage,
}
