use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Result;
use bytes::Bytes;
use std::io::BufRead;
use std::path::PathBuf;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    /// Parse the object payload; the `<kind> <size>\0` header has already
    /// been consumed by the caller.
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Identity of the object. Computed from the kind's fixed field chunks,
    /// not from the serialized record.
    fn object_id(&self) -> ObjectId;

    fn object_path(&self) -> PathBuf {
        self.object_id().to_path()
    }
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    /// Parse a full object record (header included) into the right kind.
    pub fn deserialize(mut reader: impl BufRead) -> Result<Self> {
        let object_type = ObjectType::parse_object_type(&mut reader)?;

        Ok(match object_type {
            ObjectType::Blob => ObjectBox::Blob(Box::new(Blob::deserialize(reader)?)),
            ObjectType::Commit => ObjectBox::Commit(Box::new(Commit::deserialize(reader)?)),
        })
    }

    pub fn into_commit(self) -> Option<Commit> {
        match self {
            ObjectBox::Commit(commit) => Some(*commit),
            ObjectBox::Blob(_) => None,
        }
    }

    pub fn into_blob(self) -> Option<Blob> {
        match self {
            ObjectBox::Blob(blob) => Some(*blob),
            ObjectBox::Commit(_) => None,
        }
    }
}
