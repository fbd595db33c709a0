//! Gitlet data structures and algorithms
//!
//! This module contains the engine's core types and algorithms:
//!
//! - `checkout`: whole-tree checkout and the untracked-overwrite guard
//! - `index`: staging area record format
//! - `log`: commit history traversal
//! - `merge`: merge-base search and three-way resolution
//! - `objects`: object types (blob, commit) and their identities
//! - `status`: working tree status inspection

pub mod checkout;
pub mod index;
pub mod log;
pub mod merge;
pub mod objects;
pub mod status;
