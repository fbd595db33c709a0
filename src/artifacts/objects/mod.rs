//! Gitlet object types and operations
//!
//! The object store holds two kinds of immutable objects, identified by
//! SHA-1 hashes:
//!
//! - **Blob**: a staged file's raw bytes together with its source path
//! - **Commit**: a snapshot with metadata (message, timestamp, parents,
//!   tracked map)
//!
//! Both kinds serialize to the on-disk format `<kind> <size>\0<payload>`.
//! Object identity is *not* the hash of that record: each kind derives its id
//! from a fixed sequence of textual fields, so the id stays stable as long as
//! those fields keep their exact textual form.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Shortest commit-id prefix accepted by lookup
pub const MIN_SHORT_ID_LENGTH: usize = 4;
