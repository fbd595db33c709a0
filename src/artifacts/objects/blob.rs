//! Gitlet blob object
//!
//! Blobs store staged file content. Unlike plain content-addressed storage,
//! a blob also records the absolute path it was staged from, and that path
//! participates in the blob's identity: the same bytes staged at two paths
//! are two distinct objects.
//!
//! ## Format
//!
//! On disk: `blob <size>\0source <path>\n<content>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// Blob object representing one staged version of a working-tree file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// Absolute path the content was staged from, verbatim
    source_path: String,
    /// Raw file content
    content: Bytes,
}

impl Blob {
    /// Get the path the blob was staged from
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Get the file content
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();
        writeln!(content_bytes, "source {}", self.source_path)?;
        content_bytes.write_all(&self.content)?;

        let mut blob_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        blob_bytes.write_all(header.as_bytes())?;
        blob_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(blob_bytes))
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let mut source_line = Vec::new();
        reader.read_until(b'\n', &mut source_line)?;

        let source_line = String::from_utf8(source_line)?;
        let source_path = source_line
            .trim_end_matches('\n')
            .strip_prefix("source ")
            .context("Invalid blob object: missing source line")?
            .to_string();

        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(source_path, Bytes::from(content)))
    }
}

impl Object for Blob {
    fn object_type(&self) -> ObjectType {
        ObjectType::Blob
    }

    fn object_id(&self) -> ObjectId {
        ObjectId::digest(&[self.source_path.as_bytes(), &self.content])
    }
}
