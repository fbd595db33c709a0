//! Gitlet commit object
//!
//! Commits are immutable snapshots of the tracked working tree. They contain:
//! - The commit message
//! - A creation timestamp (the initial commit is pinned to the Unix epoch)
//! - Parent commit ID(s): none for the initial commit, two for merges
//! - The tracked map: absolute file path → blob ID
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! timestamp <millis>
//! parent <parent-sha>
//! tracked <blob-sha> <path>
//!
//! <commit message>
//! ```
//!
//! ## Identity
//!
//! A commit's ID is the SHA-1 of four textual chunks — timestamp millis,
//! message, parent list, tracked map — each rendered in a canonical form.
//! The tracked map renders in ascending path order, so identity is a pure
//! function of content regardless of insertion order.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Message of the commit created by `init`
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Gitlet commit object
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Commit message; the command layer rejects empty ones
    message: String,
    /// Creation instant; identity uses its epoch-millisecond form
    timestamp: DateTime<Utc>,
    /// Parent commit IDs (empty for the initial commit, two for merges)
    parents: Vec<ObjectId>,
    /// Absolute file path → blob ID
    tracked: BTreeMap<String, ObjectId>,
}

impl Commit {
    /// Create a commit stamped with the current wall-clock time
    pub fn new(
        message: String,
        parents: Vec<ObjectId>,
        tracked: BTreeMap<String, ObjectId>,
    ) -> Self {
        Self::new_with_timestamp(message, parents, tracked, Utc::now())
    }

    /// Create a commit with an explicit timestamp
    pub fn new_with_timestamp(
        message: String,
        parents: Vec<ObjectId>,
        tracked: BTreeMap<String, ObjectId>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Commit {
            message,
            timestamp,
            parents,
            tracked,
        }
    }

    /// The deterministic root commit written by `init`
    ///
    /// Epoch timestamp, fixed message, no parents, nothing tracked — so its
    /// ID is identical in every repository.
    pub fn initial() -> Self {
        Self::new_with_timestamp(
            INITIAL_COMMIT_MESSAGE.to_string(),
            Vec::new(),
            BTreeMap::new(),
            DateTime::UNIX_EPOCH,
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() == 2
    }

    pub fn tracked(&self) -> &BTreeMap<String, ObjectId> {
        &self.tracked
    }

    pub fn into_tracked(self) -> BTreeMap<String, ObjectId> {
        self.tracked
    }

    /// Format the timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 1 00:00:00 1970 +0000" (always rendered at UTC
    /// so log output does not depend on the machine's timezone)
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    /// Render the commit's `log` entry
    ///
    /// ```text
    /// ===
    /// commit <sha>
    /// Merge: <short-a> <short-b>
    /// Date: <timestamp>
    /// <message>
    /// ```
    ///
    /// The `Merge:` line appears only for two-parent commits and abbreviates
    /// each parent to 7 characters. Every line including the message is
    /// newline-terminated; callers append the blank separator line.
    pub fn log_entry(&self) -> String {
        let mut entry = String::new();

        entry.push_str("===\n");
        entry.push_str(&format!("commit {}\n", self.object_id()));
        if let [first, second] = self.parents.as_slice() {
            entry.push_str(&format!(
                "Merge: {} {}\n",
                first.to_short_oid(),
                second.to_short_oid()
            ));
        }
        entry.push_str(&format!("Date: {}\n", self.readable_timestamp()));
        entry.push_str(&format!("{}\n", self.message));

        entry
    }

    fn timestamp_text(&self) -> String {
        self.timestamp.timestamp_millis().to_string()
    }

    fn parents_text(&self) -> String {
        let parents = self
            .parents
            .iter()
            .map(|parent| parent.as_ref())
            .collect::<Vec<_>>();

        format!("[{}]", parents.join(", "))
    }

    fn tracked_text(&self) -> String {
        let entries = self
            .tracked
            .iter()
            .map(|(path, oid)| format!("{path}={oid}"))
            .collect::<Vec<_>>();

        format!("{{{}}}", entries.join(", "))
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!("timestamp {}", self.timestamp.timestamp_millis()));
        for parent in &self.parents {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        for (path, oid) in &self.tracked {
            object_content.push(format!("tracked {} {}", oid.as_ref(), path));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        let mut content_bytes = Vec::new();
        content_bytes.write_all(object_content.as_bytes())?;

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        // split, not lines(): the inverse of the join in serialize, so
        // messages keep trailing newlines byte-for-byte
        let mut lines = content.split('\n');

        let timestamp_line = lines
            .next()
            .context("Invalid commit object: missing timestamp line")?;
        let millis = timestamp_line
            .strip_prefix("timestamp ")
            .context("Invalid commit object: invalid timestamp line")?
            .parse::<i64>()
            .context("Invalid commit object: non-numeric timestamp")?;
        let timestamp = DateTime::from_timestamp_millis(millis)
            .context("Invalid commit object: timestamp out of range")?;

        let mut parents = Vec::new();
        let mut tracked = BTreeMap::new();
        let mut next_line = lines
            .next()
            .context("Invalid commit object: truncated header")?;

        while let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_oid.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: truncated header")?;
        }

        while let Some(entry) = next_line.strip_prefix("tracked ") {
            anyhow::ensure!(
                entry.len() > OBJECT_ID_LENGTH + 1,
                "Invalid commit object: malformed tracked line"
            );
            let (oid, path) = entry.split_at(OBJECT_ID_LENGTH);
            let path = path
                .strip_prefix(' ')
                .context("Invalid commit object: malformed tracked line")?;
            tracked.insert(path.to_string(), ObjectId::try_parse(oid.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: truncated header")?;
        }

        anyhow::ensure!(
            next_line.is_empty(),
            "Invalid commit object: missing blank line before message"
        );

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new_with_timestamp(message, parents, tracked, timestamp))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn object_id(&self) -> ObjectId {
        ObjectId::digest(&[
            self.timestamp_text().as_bytes(),
            self.message.as_bytes(),
            self.parents_text().as_bytes(),
            self.tracked_text().as_bytes(),
        ])
    }
}
