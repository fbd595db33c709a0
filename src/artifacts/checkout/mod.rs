//! Checkout operations
//!
//! Switching commits means clearing the staging area, emptying the top
//! level of the working tree, and restoring the target commit's tracked
//! blobs. The untracked-overwrite check rejects the whole operation before
//! any file is touched.

pub mod migration;
