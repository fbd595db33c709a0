//! Index file format.
//!
//! The index is one binary record at `.gitlet/index`:
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "GIDX" (4 bytes)
//!   - Version: 1 (4 bytes, big-endian)
//!   - Total entry count across all sections (4 bytes, big-endian)
//!
//! Sections, in order: tracked, added, removed.
//!   - Each opens with its own 4-byte big-endian entry count.
//!   - Entries are sorted ascending by path.
//!   - tracked/added entry: length-prefixed path, then the 40 ASCII bytes
//!     of the blob id. removed entry: length-prefixed path alone.
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```

pub mod checksum;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 12;

/// Magic signature identifying index files
pub const SIGNATURE: &str = "GIDX";

/// Index file format version
pub const VERSION: u32 = 1;
