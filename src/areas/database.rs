use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, ObjectBox, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::{MIN_SHORT_ID_LENGTH, OBJECT_ID_LENGTH};
use crate::errors::GitletError;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

/// Content-addressed object store rooted at `.gitlet/objects`.
///
/// Objects are zlib-compressed files sharded by the first two characters of
/// their id, so commit `a1b2...` lives at `objects/a1/b2...`.
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Write an object to the store unless a file for its id already exists.
    ///
    /// Writes go through a temp file in the shard directory followed by a
    /// rename, so a crash never leaves a truncated object behind.
    pub fn store(&self, object: &impl Object) -> anyhow::Result<()> {
        let object_path = self.path.join(object.object_path());

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object.serialize()?)?;
        }

        Ok(())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    pub fn parse_object(&self, object_id: &ObjectId) -> anyhow::Result<ObjectBox> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_path)?;

        ObjectBox::deserialize(Cursor::new(object_content))
    }

    pub fn parse_object_as_blob(&self, object_id: &ObjectId) -> anyhow::Result<Option<Blob>> {
        Ok(self.parse_object(object_id)?.into_blob())
    }

    pub fn parse_object_as_commit(&self, object_id: &ObjectId) -> anyhow::Result<Option<Commit>> {
        Ok(self.parse_object(object_id)?.into_commit())
    }

    /// Deserialization probe used when scanning the store. Anything that is
    /// not a well-formed commit object, including stray temp files left by
    /// interrupted writes, is simply not a commit.
    pub fn is_commit_object(&self, object_id: &ObjectId) -> bool {
        self.parse_object(object_id)
            .is_ok_and(|object| object.into_commit().is_some())
    }

    /// Resolve a possibly abbreviated commit id to the full forty characters.
    ///
    /// Abbreviations must be at least four characters long. A prefix that
    /// matches more than one commit object is rejected, and blob objects
    /// sharing the prefix are never counted as candidates.
    pub fn resolve_commit_id(&self, given_id: &str) -> anyhow::Result<ObjectId> {
        if given_id.len() < MIN_SHORT_ID_LENGTH {
            anyhow::bail!(GitletError::ShortIdTooShort);
        }

        if given_id.len() >= OBJECT_ID_LENGTH {
            let Ok(object_id) = ObjectId::try_parse(given_id.to_owned()) else {
                anyhow::bail!(GitletError::NoSuchCommit);
            };

            if !self.contains(&object_id) || !self.is_commit_object(&object_id) {
                anyhow::bail!(GitletError::NoSuchCommit);
            }

            return Ok(object_id);
        }

        // all-hex also guarantees the shard split below lands on a char boundary
        if !given_id.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            anyhow::bail!(GitletError::NoSuchCommit);
        }

        let mut resolved = None;

        for candidate_id in self.find_objects_by_prefix(given_id)? {
            if !self.is_commit_object(&candidate_id) {
                continue;
            }

            if resolved.is_some() {
                anyhow::bail!(GitletError::AmbiguousId);
            }

            resolved = Some(candidate_id);
        }

        resolved.context(GitletError::NoSuchCommit)
    }

    /// Find all object ids starting with the given prefix.
    ///
    /// Callers abbreviate to at least four characters, so the shard
    /// directory to search is always known.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);
        let mut matches = Vec::new();

        if dir_path.is_dir() {
            for entry in std::fs::read_dir(&dir_path)? {
                let file_name = entry?.file_name();
                let file_name = file_name.to_string_lossy();

                if file_name.starts_with(file_prefix)
                    && let Ok(object_id) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
                {
                    matches.push(object_id);
                }
            }
        }

        Ok(matches)
    }

    /// Walk every shard directory and collect the ids of all commit objects,
    /// whether or not any branch still reaches them.
    pub fn commit_object_ids(&self) -> anyhow::Result<Vec<ObjectId>> {
        let mut commit_ids = Vec::new();

        for shard in std::fs::read_dir(&self.path).context(format!(
            "Unable to read object directory {}",
            self.path.display()
        ))? {
            let shard_path = shard?.path();
            if !shard_path.is_dir() {
                continue;
            }

            let Some(shard_name) = shard_path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
            else {
                continue;
            };

            for entry in std::fs::read_dir(&shard_path)? {
                let file_name = entry?.file_name();

                let Ok(object_id) =
                    ObjectId::try_parse(format!("{shard_name}{}", file_name.to_string_lossy()))
                else {
                    continue;
                };

                if self.is_commit_object(&object_id) {
                    commit_ids.push(object_id);
                }
            }
        }

        Ok(commit_ids)
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
