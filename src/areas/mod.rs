//! Core repository components
//!
//! This module contains the fundamental building blocks of a repository:
//!
//! - `database`: Object database for storing blobs and commits
//! - `index`: Staging area tracking additions and removals
//! - `refs`: Reference management (branches, HEAD)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub(crate) mod database;
pub(crate) mod index;
pub(crate) mod refs;
pub mod repository;
pub(crate) mod workspace;
