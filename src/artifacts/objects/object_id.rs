//! Gitlet object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character hexadecimal strings representing SHA-1 hashes.
//! They uniquely identify all objects in the store (blobs and commits).
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "abc123...def")
//! - Short: First 7 characters (e.g., "abc123")
//!
//! ## Storage
//!
//! Objects are stored in `.gitlet/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use sha1::{Digest, Sha1};
use std::path::PathBuf;

/// Gitlet object identifier (SHA-1 hash)
///
/// A 40-character hexadecimal string that uniquely identifies an object.
/// Implements various utilities for parsing, digesting, and path conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Digest an ordered sequence of byte chunks into an object ID
    ///
    /// Feeding the chunks one by one is equivalent to hashing their
    /// concatenation; object identities are defined as chunk sequences so the
    /// call sites read like the identity contract.
    pub fn digest(chunks: &[&[u8]]) -> Self {
        let mut hasher = Sha1::new();
        for chunk in chunks {
            hasher.update(chunk);
        }

        let oid = hasher.finalize();
        Self(format!("{oid:x}"))
    }

    /// Convert to file system path for object storage
    ///
    /// Splits the hash as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash (standard abbreviation in log output)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
