//! The staging area.
//!
//! Tracks three sets keyed by absolute working-file path: the snapshot of
//! HEAD's tracked files, additions staged for the next commit, and tracked
//! paths staged for removal. The whole area is persisted as a single
//! checksummed binary record; see [`crate::artifacts::index`] for the
//! format. The tracked snapshot is refreshed from HEAD on every load, so
//! only the staged additions and removals carry state between invocations.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::{HEADER_SIZE, SIGNATURE, VERSION};
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::{Context, anyhow};
use byteorder::{ByteOrder, WriteBytesExt};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

#[derive(Debug)]
pub struct StagingArea {
    /// Path to the index file (typically `.gitlet/index`)
    path: Box<Path>,
    /// Files tracked by HEAD, refreshed from the head commit on load
    tracked: BTreeMap<String, ObjectId>,
    /// Additions staged for the next commit
    added: BTreeMap<String, ObjectId>,
    /// Tracked paths staged for removal
    removed: BTreeSet<String>,
}

impl StagingArea {
    /// Read the staging area from disk, or start fresh if no index file
    /// exists yet. Either way the tracked snapshot is replaced with the
    /// given head commit map.
    pub fn load_or_new(
        path: Box<Path>,
        head_tracked: BTreeMap<String, ObjectId>,
    ) -> anyhow::Result<Self> {
        let mut staging_area = StagingArea {
            path,
            tracked: BTreeMap::new(),
            added: BTreeMap::new(),
            removed: BTreeSet::new(),
        };

        staging_area.rehydrate()?;
        staging_area.tracked = head_tracked;

        Ok(staging_area)
    }

    pub fn added(&self) -> &BTreeMap<String, ObjectId> {
        &self.added
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn tracked(&self) -> &BTreeMap<String, ObjectId> {
        &self.tracked
    }

    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// The tracked map with staged additions applied and staged removals
    /// dropped, without consuming the staged state.
    pub fn effective_tracked(&self) -> BTreeMap<String, ObjectId> {
        let mut effective = self.tracked.clone();
        effective.extend(
            self.added
                .iter()
                .map(|(path, blob_id)| (path.clone(), blob_id.clone())),
        );
        effective.retain(|path, _| !self.removed.contains(path));

        effective
    }

    /// Stage a working file for addition.
    ///
    /// Returns whether the staging area changed. Re-adding a file whose
    /// content matches what HEAD tracks undoes any pending addition or
    /// removal instead of staging it, and staging the same content twice is
    /// a no-op. The blob is written to the object store on first staging.
    pub fn stage(
        &mut self,
        path_string: String,
        blob: Blob,
        database: &Database,
    ) -> anyhow::Result<bool> {
        let blob_id = blob.object_id();

        if let Some(tracked_id) = self.tracked.get(&path_string)
            && *tracked_id == blob_id
        {
            if self.added.remove(&path_string).is_some() {
                return Ok(true);
            }
            return Ok(self.removed.remove(&path_string));
        }

        self.removed.remove(&path_string);
        let previous_id = self.added.insert(path_string, blob_id.clone());
        if previous_id.is_some_and(|previous| previous == blob_id) {
            return Ok(false);
        }

        database.store(&blob)?;
        Ok(true)
    }

    /// Stage a file for removal.
    ///
    /// A pending addition is simply dropped. A file tracked by HEAD is
    /// marked removed and deleted from the working directory. Returns
    /// whether the staging area changed.
    pub fn unstage(&mut self, path_string: &str, workspace: &Workspace) -> anyhow::Result<bool> {
        if self.added.remove(path_string).is_some() {
            return Ok(true);
        }

        if self.tracked.contains_key(path_string) {
            if workspace.file_exists(path_string) {
                workspace.remove_file(path_string)?;
            }
            return Ok(self.removed.insert(path_string.to_string()));
        }

        Ok(false)
    }

    /// Fold the staged changes into the tracked map, clear them, and return
    /// the map the next commit should record.
    pub fn commit_snapshot(&mut self) -> BTreeMap<String, ObjectId> {
        let added = std::mem::take(&mut self.added);
        self.tracked.extend(added);
        for path in std::mem::take(&mut self.removed) {
            self.tracked.remove(&path);
        }

        self.tracked.clone()
    }

    pub fn clear(&mut self) {
        self.added.clear();
        self.removed.clear();
    }

    /// Persist the staging area as a single checksummed record.
    pub fn save(&self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("failed to open index file at {:?}", self.path))?;

        let mut writer = Checksum::new(&mut index_file);

        let total_entries = self.tracked.len() + self.added.len() + self.removed.len();
        let mut header = Vec::with_capacity(HEADER_SIZE);
        header.write_all(SIGNATURE.as_bytes())?;
        header.write_u32::<byteorder::NetworkEndian>(VERSION)?;
        header.write_u32::<byteorder::NetworkEndian>(total_entries as u32)?;
        writer.write(&header)?;

        Self::write_entries_section(&mut writer, &self.tracked)?;
        Self::write_entries_section(&mut writer, &self.added)?;
        Self::write_paths_section(&mut writer, &self.removed)?;

        writer.write_checksum()
    }

    fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.path.exists() {
            return Ok(());
        }

        let mut index_file = std::fs::OpenOptions::new()
            .read(true)
            .open(&self.path)
            .with_context(|| format!("failed to open index file at {:?}", self.path))?;

        // an index file truncated by a fresh clear is the same as no file
        if index_file.metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(&mut index_file);

        let total_entries = Self::parse_header(&mut reader)?;
        self.tracked = Self::read_entries_section(&mut reader)?;
        self.added = Self::read_entries_section(&mut reader)?;
        self.removed = Self::read_paths_section(&mut reader)?;

        let parsed_entries = self.tracked.len() + self.added.len() + self.removed.len();
        if parsed_entries != total_entries as usize {
            return Err(anyhow!(
                "Index header declares {total_entries} entries but sections hold {parsed_entries}"
            ));
        }

        reader.verify()
    }

    fn parse_header(reader: &mut Checksum) -> anyhow::Result<u32> {
        let header_bytes = reader.read(HEADER_SIZE)?;

        let marker = &header_bytes[0..4];
        if marker != SIGNATURE.as_bytes() {
            return Err(anyhow!("Invalid index file signature"));
        }

        let version = byteorder::NetworkEndian::read_u32(&header_bytes[4..8]);
        if version != VERSION {
            return Err(anyhow!("Unsupported index file version: {version}"));
        }

        Ok(byteorder::NetworkEndian::read_u32(&header_bytes[8..12]))
    }

    fn write_entries_section(
        writer: &mut Checksum,
        entries: &BTreeMap<String, ObjectId>,
    ) -> anyhow::Result<()> {
        Self::write_u32(writer, entries.len() as u32)?;

        for (path, blob_id) in entries {
            Self::write_path(writer, path)?;
            writer.write(blob_id.as_ref().as_bytes())?;
        }

        Ok(())
    }

    fn write_paths_section(writer: &mut Checksum, paths: &BTreeSet<String>) -> anyhow::Result<()> {
        Self::write_u32(writer, paths.len() as u32)?;

        for path in paths {
            Self::write_path(writer, path)?;
        }

        Ok(())
    }

    fn read_entries_section(reader: &mut Checksum) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let entry_count = Self::read_u32(reader)?;
        let mut entries = BTreeMap::new();

        for _ in 0..entry_count {
            let path = Self::read_path(reader)?;
            let blob_id = Self::read_object_id(reader)?;
            entries.insert(path, blob_id);
        }

        Ok(entries)
    }

    fn read_paths_section(reader: &mut Checksum) -> anyhow::Result<BTreeSet<String>> {
        let path_count = Self::read_u32(reader)?;
        let mut paths = BTreeSet::new();

        for _ in 0..path_count {
            paths.insert(Self::read_path(reader)?);
        }

        Ok(paths)
    }

    fn write_u32(writer: &mut Checksum, value: u32) -> anyhow::Result<()> {
        let mut bytes = Vec::with_capacity(4);
        bytes.write_u32::<byteorder::NetworkEndian>(value)?;
        writer.write(&bytes)
    }

    fn read_u32(reader: &mut Checksum) -> anyhow::Result<u32> {
        let bytes = reader.read(4)?;
        Ok(byteorder::NetworkEndian::read_u32(&bytes))
    }

    fn write_path(writer: &mut Checksum, path: &str) -> anyhow::Result<()> {
        Self::write_u32(writer, path.len() as u32)?;
        writer.write(path.as_bytes())
    }

    fn read_path(reader: &mut Checksum) -> anyhow::Result<String> {
        let path_length = Self::read_u32(reader)? as usize;
        let path_bytes = reader.read(path_length)?;

        String::from_utf8(path_bytes.to_vec()).context("Invalid UTF-8 path in index")
    }

    fn read_object_id(reader: &mut Checksum) -> anyhow::Result<ObjectId> {
        let id_bytes = reader.read(OBJECT_ID_LENGTH)?;
        let id = String::from_utf8(id_bytes.to_vec()).context("Invalid object id in index")?;

        ObjectId::try_parse(id)
    }
}
